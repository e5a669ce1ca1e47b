//! CLI argument parsing and the run driver.
//!
//! This is thin glue around the library: it resolves the target release
//! codename, runs the read → reconcile → write sequence, and reports what
//! happened on stdout. All state is threaded explicitly; nothing global.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use meridian_sources::reconcile::Reconciler;
use meridian_sources::store::ListStore;
use meridian_sources::{codename, defaults};

/// Meridian Sources - keep the Meridian APT repository entry up to date
#[derive(Parser, Debug)]
#[command(name = "meridian-sources")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable the repository entries
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Disable (comment out) the repository entries
    #[arg(long)]
    pub disable: bool,

    /// Path of the sources list file to manage
    #[arg(
        long,
        value_name = "PATH",
        env = "MERIDIAN_SOURCES_FILE",
        default_value = defaults::LIST_PATH
    )]
    pub file: PathBuf,

    /// Release codename to use instead of querying lsb_release
    #[arg(long, value_name = "CODENAME")]
    pub release: Option<String>,

    /// Print full diagnostic detail on failure
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Execute one reconciliation run.
    pub fn execute(&self) -> Result<()> {
        // The codename is resolved before any file access; without it there
        // is no target state.
        let release = match &self.release {
            Some(token) => {
                codename::validate(token)?;
                token.clone()
            }
            None => codename::detect()?,
        };

        let mut store = ListStore::open(&self.file, defaults::HEADER)?;
        let entries = store.read_entries()?;

        let mut reconciler = Reconciler::new(entries, defaults::BASE_URL, defaults::COMPONENTS)?;
        reconciler.set_release(&release);
        reconciler.add_missing(&release);
        if self.enable {
            reconciler.set_enabled(true);
        } else if self.disable {
            reconciler.set_enabled(false);
        }

        if reconciler.should_write() {
            store.write(reconciler.entries())?;
        }

        self.report(&store, &reconciler, &release);
        Ok(())
    }

    /// Print one human-readable line per thing that happened.
    fn report(&self, store: &ListStore, reconciler: &Reconciler, release: &str) {
        if store.created() || reconciler.added() {
            println!("new configuration generated: {}", self.file.display());
        }
        if reconciler.release_changed() {
            println!("updated to release {}", release);
        }
        if reconciler.enabled_changed() {
            if self.enable {
                println!("repository enabled");
            } else {
                println!("repository disabled");
            }
        }
        if !reconciler.should_write() {
            println!("not modified");
        }
    }
}
