//! Latest capture selection
//!
//! "Latest" is decided purely by name: the greatest path under byte-wise
//! string ordering wins. This holds for timestamped capture names and for
//! zero-padded sequential names, but it does not look at modification times.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::errors::{Result, capture_not_found_error};

use super::scanner::glob_files;

/// Returns the lexicographically greatest path, or `None` for an empty slice
///
/// Paths are compared as whole strings, not component by component. On ties
/// the earliest element wins.
pub fn latest_match<P: AsRef<Path>>(paths: &[P]) -> Option<&P> {
    paths.iter().reduce(|latest, candidate| {
        if candidate.as_ref().as_os_str() > latest.as_ref().as_os_str() {
            candidate
        } else {
            latest
        }
    })
}

/// Finds the latest capture in the configured capture directory
///
/// # Arguments
/// * `config` - The capture configuration
/// * `home` - Home directory the capture directory is relative to
///
/// # Errors
/// Returns a capture-not-found error when nothing matches, or the scanning
/// error if the directory cannot be globbed.
pub fn find_latest_capture(config: &Config, home: &Path) -> Result<PathBuf> {
    let capture_root = config.capture_root(home);
    let capture_glob = config.capture_glob();

    let candidates = glob_files(&capture_root, &capture_glob)?;
    debug!(
        "Found {} capture(s) matching {} in {}",
        candidates.len(),
        capture_glob,
        capture_root.display()
    );

    latest_match(&candidates).cloned().ok_or_else(|| {
        capture_not_found_error(&capture_root.join(&capture_glob).display().to_string())
    })
}
