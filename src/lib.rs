//! Moves the latest screen capture into a directory.
//!
//! The capture directory, file pattern, extension and sequential digit width
//! come from `~/.app/mvsc/config.yaml`. The latest capture is the match with
//! the greatest file name; it is moved (or copied) into the destination
//! directory under its own name, an explicit name, or the next zero-padded
//! sequence number.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod path_gen;
pub mod processor;
pub mod utils;

pub use errors::{Error, Result};

pub mod prelude {
    pub use crate::cli::{
        build_command, get_config_override, get_destination, get_log_file, get_matches,
        get_relocate_options, get_verbosity,
    };
    pub use crate::config::{Config, default_config_path, load_config};
    pub use crate::discovery::{find_latest_capture, glob_files, latest_match};
    pub use crate::errors::{
        capture_not_found_error, conflicting_naming_options_error, directory_not_found_error,
        file_operation_error, glob_pattern_error, invalid_filename_error,
        invalid_sequence_name_error, path_operation_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::path_gen::{NamingMode, destination_file_name, sequential_file_name};
    pub use crate::processor::{FileAction, RelocateOptions, Relocation, relocate};
    pub use crate::utils::find_home_dir;
}
