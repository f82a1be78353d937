//! Directory scanning functionality
//!
//! This module contains functions for listing the files of a directory that
//! match a glob pattern.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use log::trace;

use crate::errors::{Error, Result, glob_pattern_error, invalid_filename_error};

/// Lists the entries of `directory` whose names match `pattern`
///
/// The directory part is escaped so that brackets or wildcards in it are
/// taken literally; only `pattern` is interpreted as a glob.
///
/// # Errors
/// Returns an error if the pattern is invalid, if a path is not valid
/// unicode, or if a matched entry cannot be read.
pub fn glob_files(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let directory_str = directory
        .to_str()
        .ok_or_else(|| invalid_filename_error(directory.to_path_buf()))?;

    let full_pattern = Path::new(&Pattern::escape(directory_str)).join(pattern);
    let full_pattern_str = full_pattern
        .to_str()
        .ok_or_else(|| invalid_filename_error(full_pattern.clone()))?;

    trace!("Globbing {full_pattern_str}");

    glob(full_pattern_str)
        .map_err(|e| glob_pattern_error(e, full_pattern_str))?
        .map(|entry| entry.map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_glob_files_matches_pattern_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Screen Shot 1.png"), b"a").unwrap();
        fs::write(dir.path().join("Screen Shot 2.png"), b"b").unwrap();
        fs::write(dir.path().join("Screen Shot 3.jpg"), b"c").unwrap();
        fs::write(dir.path().join("notes.png"), b"d").unwrap();

        let mut found = glob_files(dir.path(), "Screen Shot *.png").unwrap();
        found.sort();

        assert_eq!(
            found,
            vec![
                dir.path().join("Screen Shot 1.png"),
                dir.path().join("Screen Shot 2.png"),
            ]
        );
    }

    #[test]
    fn test_glob_files_escapes_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("shots [old]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.png"), b"a").unwrap();

        let found = glob_files(&dir, "*.png").unwrap();
        assert_eq!(found, vec![dir.join("a.png")]);
    }

    #[test]
    fn test_glob_files_missing_directory_is_empty() {
        let root = tempfile::tempdir().unwrap();
        let found = glob_files(&root.path().join("missing"), "*.png").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_glob_files_invalid_pattern() {
        let root = tempfile::tempdir().unwrap();
        let result = glob_files(root.path(), "[.png");
        assert!(matches!(result, Err(Error::GlobPattern { .. })));
    }
}
