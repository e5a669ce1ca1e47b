//! Default values for the managed vendor repository.
//!
//! This module centralizes the constants that describe the Meridian
//! repository, ensuring consistency and avoiding duplication. They are
//! threaded explicitly into [`crate::reconcile::Reconciler`] and
//! [`crate::store::ListStore`] construction; nothing reads them ambiently.

/// Base URL of the Meridian APT repository.
///
/// Existing lines are recognized as "ours" by exact comparison of their URL
/// field against this value; synthesized lines use it verbatim.
pub const BASE_URL: &str = "https://apt.meridian.dev/ubuntu";

/// Components every managed entry carries.
pub const COMPONENTS: &[&str] = &["main"];

/// Default path of the managed sources list file.
///
/// Can be overridden by the `--file` CLI flag or the `MERIDIAN_SOURCES_FILE`
/// environment variable.
pub const LIST_PATH: &str = "/etc/apt/sources.list.d/meridian.list";

/// Comment block seeded at the top of a freshly created list file.
pub const HEADER: &[&str] = &[
    "# Meridian APT repository.",
    "# This file is managed by meridian-sources; unrelated lines are preserved.",
];
