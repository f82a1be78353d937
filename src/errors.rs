use glob::{GlobError, PatternError};
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for mvsc
#[derive(Debug)]
pub enum Error {
    /// Both sequential naming and an explicit file name were requested
    ConflictingNamingOptions,
    /// The destination is missing or is not a directory
    DirectoryNotFound { path: PathBuf },
    /// No file in the capture directory matched the configured pattern
    CaptureNotFound { pattern: String },
    /// A file matching the sequential pattern cannot be read as a number
    InvalidSequenceName { name: String, detail: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// A glob match could not be read
    GlobEntry { source: GlobError },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// The home directory could not be determined
    HomeDirectoryNotFound,
}

impl Error {
    /// Whether the error is a violated invocation precondition
    ///
    /// Precondition failures are raised before anything on disk is touched;
    /// every other variant is an environment fault.
    pub fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Error::ConflictingNamingOptions
                | Error::DirectoryNotFound { .. }
                | Error::CaptureNotFound { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConflictingNamingOptions => {
                write!(
                    f,
                    "Conflicting naming options: --seq and --file cannot be used together"
                )
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::CaptureNotFound { pattern } => {
                write!(f, "No screen capture found matching {pattern}")
            }
            Error::InvalidSequenceName { name, detail } => {
                write!(f, "Invalid sequential file name '{name}': {detail}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::GlobEntry { source } => {
                write!(f, "Failed to read {}", source.path().display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::HomeDirectoryNotFound => {
                write!(f, "Failed to determine the home directory")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            Error::GlobEntry { source } => Some(source),
            _ => None,
        }
    }
}

impl From<GlobError> for Error {
    fn from(err: GlobError) -> Self {
        Error::GlobEntry { source: err }
    }
}

/// Custom Result type for mvsc
///
/// # Examples
/// ```
/// use mvsc::prelude::{Result, directory_not_found_error};
/// use std::path::Path;
///
/// fn require_dir(path: &Path) -> Result<()> {
///     if path.is_dir() {
///         Ok(())
///     } else {
///         Err(directory_not_found_error(path.to_path_buf()))
///     }
/// }
/// # assert!(require_dir(Path::new("/definitely/not/here")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a conflicting naming options error
pub fn conflicting_naming_options_error() -> Error {
    Error::ConflictingNamingOptions
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a capture not found error
pub fn capture_not_found_error(pattern: &str) -> Error {
    Error::CaptureNotFound {
        pattern: pattern.to_string(),
    }
}

/// Helper function to create an invalid sequence name error
pub fn invalid_sequence_name_error(name: &str, detail: &str) -> Error {
    Error::InvalidSequenceName {
        name: name.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_naming_options_error() {
        let error = conflicting_naming_options_error();

        let error_string = format!("{error}");
        assert!(
            error_string.contains("--seq") && error_string.contains("--file"),
            "Error message should name both options"
        );
        assert!(error.is_precondition_failure());
    }

    #[test]
    fn test_directory_not_found_error() {
        let path = PathBuf::from("/test/nonexistent");
        let error = directory_not_found_error(path.clone());

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/nonexistent"),
            "Error message should contain the path"
        );
        assert!(error.is_precondition_failure());
    }

    #[test]
    fn test_capture_not_found_error() {
        let error = capture_not_found_error("/home/me/Pictures/Screen Shot *.png");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Screen Shot *.png"),
            "Error message should contain the pattern"
        );
        assert!(error.is_precondition_failure());
    }

    #[test]
    fn test_invalid_sequence_name_error() {
        let error = invalid_sequence_name_error("12a.png", "invalid digit found in string");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("12a.png"),
            "Error message should contain the offending name"
        );
        assert!(error_string.contains("invalid digit"));
        assert!(!error.is_precondition_failure());
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("/test/path");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = file_operation_error(io_error, path.clone(), "move");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("move"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("/test/path"),
            "Error message should contain the path"
        );
        assert!(!error.is_precondition_failure());
    }

    #[test]
    fn test_glob_pattern_error() {
        let pattern_error = glob::Pattern::new("[").err().unwrap();
        let error = glob_pattern_error(pattern_error, "test-glob-pattern");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("test-glob-pattern"),
            "Error message should contain the pattern"
        );
    }

    #[test]
    fn test_path_operation_error() {
        let path = PathBuf::from("relative/dir");
        let error = path_operation_error(path, "make absolute");

        let error_string = format!("{error}");
        assert!(error_string.contains("make absolute"));
        assert!(error_string.contains("relative/dir"));
    }

    #[test]
    fn test_invalid_filename_error() {
        let path = PathBuf::from("/test/invalid:file");
        let error = invalid_filename_error(path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("/test/invalid:file"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_home_directory_not_found_is_fatal() {
        let error = Error::HomeDirectoryNotFound;
        assert!(!error.is_precondition_failure());
        assert!(format!("{error}").contains("home directory"));
    }
}
