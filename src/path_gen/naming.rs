//! Destination file naming
//!
//! This module decides the file name a capture receives in the destination
//! directory.

use std::path::Path;

use glob::Pattern;
use log::debug;

use crate::config::Config;
use crate::constants::DIGIT_CLASS;
use crate::discovery::{glob_files, latest_match};
use crate::errors::{Result, invalid_filename_error, invalid_sequence_name_error};

/// How the relocated capture is named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingMode {
    /// Keep the capture's own file name
    Original,
    /// Use the given base name; the configured extension is appended
    Explicit(String),
    /// Use the next zero-padded number in the destination directory
    Sequential,
}

/// Returns the next sequential file name for `directory`
///
/// Existing names made of exactly `digits` decimal digits followed by
/// `extension` are considered. Without any, the sequence starts at one;
/// otherwise the greatest name is incremented and re-padded to `digits`.
/// The padding never truncates, so `999` is followed by `1000` at width 3.
///
/// # Errors
/// Returns an error if the directory cannot be globbed, or if the greatest
/// name cannot be read as a number or incremented.
pub fn sequential_file_name(directory: &Path, digits: usize, extension: &str) -> Result<String> {
    let pattern = format!("{}{}", DIGIT_CLASS.repeat(digits), Pattern::escape(extension));
    let existing = glob_files(directory, &pattern)?;

    let Some(latest) = latest_match(&existing) else {
        return Ok(format!("{}1{}", "0".repeat(digits.saturating_sub(1)), extension));
    };

    let file_name = latest
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| invalid_filename_error(latest.clone()))?;
    let number_part = file_name.strip_suffix(extension).unwrap_or(file_name);

    let number: u64 = number_part
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid_sequence_name_error(file_name, &e.to_string()))?;
    let next = number
        .checked_add(1)
        .ok_or_else(|| invalid_sequence_name_error(file_name, "sequence number overflows"))?;

    debug!("Latest sequential file is {file_name}, continuing with {next}");

    Ok(format!("{next:0digits$}{extension}"))
}

/// Computes the destination file name for `source`
///
/// # Arguments
/// * `mode` - The naming mode requested on the command line
/// * `source` - The capture being relocated
/// * `destination` - The destination directory, used for sequential names
/// * `config` - Supplies the extension and the sequential digit width
///
/// # Errors
/// Returns an error if the source has no usable file name or if sequential
/// naming fails.
pub fn destination_file_name(
    mode: &NamingMode,
    source: &Path,
    destination: &Path,
    config: &Config,
) -> Result<String> {
    match mode {
        NamingMode::Sequential => {
            sequential_file_name(destination, config.sequential_digits, &config.extension)
        }
        NamingMode::Explicit(name) => Ok(format!("{}{}", name, config.extension)),
        NamingMode::Original => source
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| invalid_filename_error(source.to_path_buf())),
    }
}
