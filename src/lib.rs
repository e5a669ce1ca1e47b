//! # Meridian Sources List Manager
//!
//! This library keeps one APT sources list file in sync with the desired
//! state of the Meridian vendor repository: the right release codename,
//! entries for both `deb` and `deb-src`, and the enabled/disabled state the
//! operator asked for. It is a configuration-state reconciler, not a package
//! manager — it never fetches, installs or verifies anything, and it rewrites
//! the file only when something actually changed.
//!
//! ## Quick Example
//!
//! ```
//! use meridian_sources::line::SourceLine;
//! use meridian_sources::reconcile::{Entry, Reconciler};
//!
//! // Parse an existing directive line
//! let line = SourceLine::parse("deb https://apt.meridian.dev/ubuntu focal main").unwrap();
//! assert!(line.enabled);
//! assert_eq!(line.release, "focal");
//!
//! // Reconcile a file that already contains that line
//! let entries = vec![Entry::Directive(line)];
//! let mut reconciler =
//!     Reconciler::new(entries, "https://apt.meridian.dev/ubuntu", &["main"]).unwrap();
//! reconciler.set_release("jammy");
//! reconciler.add_missing("jammy");
//! assert!(reconciler.should_write());
//! ```
//!
//! ## Core Concepts
//!
//! - **Line grammar (`line`)**: parses and renders single `deb`/`deb-src`
//!   directive lines, including the reversible `#` disable marker.
//! - **Reconciliation (`reconcile`)**: holds the ordered file content as
//!   parsed directives plus opaque text lines, identifies the vendor's
//!   entries, applies the minimal field changes, and decides whether a
//!   rewrite is needed at all.
//! - **Storage (`store`)**: the only component touching disk; reads the file
//!   into entries and writes entries back, preserving every unrelated line
//!   verbatim.
//! - **Codename (`codename`)**: queries the distribution release codename
//!   from the operating environment.
//!
//! ## Execution Flow
//!
//! A run proceeds strictly in this order:
//!
//! 1. Resolve the target release codename (fatal if unavailable).
//! 2. Open and read the list file ([`store::ListStore`]).
//! 3. Identify the vendor's entries; two enabled entries of the same kind
//!    abort the run as a configuration conflict.
//! 4. Update the release, add missing entries, and apply an explicit
//!    enable/disable request if one was given.
//! 5. Rewrite the file — only if step 4 changed anything.

pub mod codename;
pub mod defaults;
pub mod error;
pub mod line;
mod line_proptest;
pub mod reconcile;
pub mod store;

pub use error::{Error, Result};
