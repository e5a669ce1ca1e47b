//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for
//! `meridian-sources`. It uses the `thiserror` library to create an `Error`
//! enum covering all anticipated failure modes, providing clear and
//! descriptive error messages.
//!
//! The variants fall into two categories:
//!
//! - **Recoverable, per-line**: [`Error::Parse`] marks a line that is not a
//!   `deb`/`deb-src` directive. It is absorbed during the read pass (the line
//!   is carried through verbatim) and never reaches the caller of a run.
//! - **Run-fatal**: [`Error::Conflict`], [`Error::Codename`] and
//!   [`Error::Storage`] abort the run before anything is written to disk.
//!   They propagate to the top, are rendered as a single diagnostic, and
//!   result in a non-zero process exit. The library never attempts automatic
//!   recovery; operator intervention is the recovery path.

use std::path::PathBuf;

use thiserror::Error;

use crate::line::EntryKind;

/// Main error type for meridian-sources operations
#[derive(Error, Debug)]
pub enum Error {
    /// The line does not match the `deb`/`deb-src` directive grammar.
    ///
    /// This is a per-line condition, not a failure of the run: callers must
    /// treat it as "not a directive" and keep the line as opaque text.
    #[error("not a repository directive: {line}")]
    Parse { line: String },

    /// Two enabled directives of the same kind both resolve to the vendor
    /// URL. The authoritative entry is ambiguous, so the run aborts without
    /// writing; the operator has to remove one of the lines by hand.
    #[error("multiple enabled {kind} entries for {url}; remove one and re-run")]
    Conflict { kind: EntryKind, url: String },

    /// The distribution codename could not be determined.
    ///
    /// Raised before any file access is attempted.
    #[error("could not determine distribution codename: {message}")]
    Codename { message: String },

    /// Opening, reading or writing the sources list file failed.
    #[error("storage error for {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
