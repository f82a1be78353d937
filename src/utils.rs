use std::path::PathBuf;

use directories::BaseDirs;

use crate::errors::{Error, Result};

/// Returns the current user's home directory
pub fn find_home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(Error::HomeDirectoryNotFound)
}
