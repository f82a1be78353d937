//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Application name used for identification
///
/// This is the name of the per-user configuration folder and the binary.
pub const APPLICATION: &str = "mvsc";

/// Hidden folder under the home directory holding per-application settings
pub const APP_FOLDER: &str = ".app";

/// Name of the configuration file inside the application folder
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Sibling configuration file name accepted when `config.yaml` is absent
pub const CONFIG_FILE_ALT_NAME: &str = "config.yml";

/// Single-digit character class used to build sequential name patterns
pub const DIGIT_CLASS: &str = "[0-9]";

/// Help text for the destination positional argument
pub const DESTINATION_HELP: &str = "Directory the capture is moved or copied to";

/// Help text for the copy command-line option
pub const COPY_HELP: &str = "Copy the capture instead of moving it";

/// Help text for the sequential command-line option
pub const SEQ_HELP: &str = "Rename the capture with the next sequential number";

/// Help text for the file name command-line option
pub const FILE_HELP: &str = "Rename the capture (the extension is appended)";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Exit status for a violated invocation precondition
pub const EXIT_PRECONDITION: u8 = 1;

/// Exit status for configuration, filesystem and other environment faults
pub const EXIT_FATAL: u8 = 3;

/// Widest sequential name accepted; every `u64` fits in twenty digits
pub const MAX_SEQUENTIAL_DIGITS: usize = 20;
