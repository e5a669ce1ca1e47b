//! # Distribution Codename Provider
//!
//! Determines the release codename of the running distribution by invoking
//! `lsb_release` once, strictly before any file access. Failure here is
//! fatal to the whole run: without a codename there is no target state to
//! reconcile towards.

use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Query the operating system for its release codename.
///
/// Runs `lsb_release --short --codename` and validates the trimmed output.
/// Any spawn failure, non-zero exit or malformed token is surfaced as
/// [`Error::Codename`].
pub fn detect() -> Result<String> {
    let output = Command::new("lsb_release")
        .args(["--short", "--codename"])
        .output()
        .map_err(|e| Error::Codename {
            message: format!("failed to run lsb_release: {}", e),
        })?;
    if !output.status.success() {
        return Err(Error::Codename {
            message: format!(
                "lsb_release exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        });
    }
    let codename = String::from_utf8_lossy(&output.stdout).trim().to_string();
    validate(&codename)?;
    debug!("detected distribution codename {}", codename);
    Ok(codename)
}

/// Check that `codename` is a plausible release codename token.
///
/// Accepts non-empty ASCII alphanumeric strings only; also applied to
/// operator-supplied overrides.
pub fn validate(codename: &str) -> Result<()> {
    if codename.is_empty() {
        return Err(Error::Codename {
            message: "codename is empty".to_string(),
        });
    }
    if !codename.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::Codename {
            message: format!("codename '{}' is not alphanumeric", codename),
        });
    }
    Ok(())
}
