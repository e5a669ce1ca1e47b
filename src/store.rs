//! # List File Storage
//!
//! The only component that touches persistent storage. A [`ListStore`] opens
//! the target sources list file once, reads it into the reconciler's entry
//! form, and rewrites it from entries when the run decided something changed.
//!
//! The handle is held open across the read and the write, so a single run
//! cannot race against itself. There is no cross-process locking: the tool is
//! operator-driven and assumes it is the sole actor for the duration of a
//! run. A failed run never leaves a partially written file behind, because
//! the write happens in one pass only after reconciliation succeeded.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::reconcile::Entry;

/// An open handle on the managed sources list file.
#[derive(Debug)]
pub struct ListStore {
    file: File,
    path: PathBuf,
    created: bool,
    header: Vec<String>,
}

impl ListStore {
    /// Open `path` for reading and writing, creating it when missing.
    ///
    /// When the file had to be created, [`ListStore::created`] reports true
    /// and the first read yields `header` (a generated comment block) instead
    /// of file content.
    pub fn open(path: &Path, header: &[&str]) -> Result<ListStore> {
        let created = !path.try_exists().map_err(|e| storage(path, e))?;
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| storage(path, e))?;
        if created {
            debug!("created new list file {}", path.display());
        }
        Ok(ListStore {
            file,
            path: path.to_path_buf(),
            created,
            header: header.iter().map(|l| (*l).to_string()).collect(),
        })
    }

    /// Whether the file did not exist before this run.
    pub fn created(&self) -> bool {
        self.created
    }

    /// Read the whole file into entries, one per line.
    ///
    /// For a freshly created file this returns the header comment block
    /// instead; the file itself is not touched until [`ListStore::write`].
    pub fn read_entries(&mut self) -> Result<Vec<Entry>> {
        if self.created {
            return Ok(self.header.iter().map(|l| Entry::Raw(l.clone())).collect());
        }
        let mut content = String::new();
        self.file
            .read_to_string(&mut content)
            .map_err(|e| storage(&self.path, e))?;
        Ok(content.lines().map(Entry::from_line).collect())
    }

    /// Truncate the file and rewrite it from `entries`.
    ///
    /// Raw entries are emitted verbatim, directives via their render form,
    /// each followed by a newline (including the last line).
    pub fn write(&mut self, entries: &[Entry]) -> Result<()> {
        let mut content = String::new();
        for entry in entries {
            content.push_str(&entry.render());
            content.push('\n');
        }
        self.file.rewind().map_err(|e| storage(&self.path, e))?;
        self.file.set_len(0).map_err(|e| storage(&self.path, e))?;
        self.file
            .write_all(content.as_bytes())
            .map_err(|e| storage(&self.path, e))?;
        self.file.flush().map_err(|e| storage(&self.path, e))?;
        debug!("rewrote {} ({} lines)", self.path.display(), entries.len());
        Ok(())
    }
}

fn storage(path: &Path, source: std::io::Error) -> Error {
    Error::Storage {
        path: path.to_path_buf(),
        source,
    }
}
