//! Configuration data structures
//!
//! This module contains the data structure for the capture configuration.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::constants::MAX_SEQUENTIAL_DIGITS;

use super::loader::expand_path;

/// Configuration for locating screen captures
///
/// Loaded once at start-up and passed by reference afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the captures, relative to the home directory
    pub capture_dir: String,
    /// Glob pattern for capture file names, without the extension
    pub capture_file_pattern: String,
    /// File extension including the leading dot, e.g. `.png`
    pub extension: String,
    /// Zero-pad width used for sequential names
    #[serde(rename = "sequestialDigits", alias = "sequentialDigits")]
    pub sequential_digits: usize,
}

impl Config {
    /// Validates the configuration
    ///
    /// - The sequential digit width must be between one and twenty
    /// - The extension must not be empty
    /// - The capture pattern plus extension must be a valid glob pattern
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self) -> Result<()> {
        if self.sequential_digits == 0 {
            return Err(anyhow!(
                "sequestialDigits must be at least 1. Sequential names need one digit or more."
            ));
        }

        if self.sequential_digits > MAX_SEQUENTIAL_DIGITS {
            return Err(anyhow!(
                "sequestialDigits must be at most {}, got {}.",
                MAX_SEQUENTIAL_DIGITS,
                self.sequential_digits
            ));
        }

        if self.extension.is_empty() {
            return Err(anyhow!(
                "extension is empty. Specify the capture file extension, e.g. \".png\"."
            ));
        }

        if !self.extension.starts_with('.') {
            log::warn!(
                "extension '{}' does not start with a dot; it is appended to file names as-is",
                self.extension
            );
        }

        let capture_glob = self.capture_glob();
        glob::Pattern::new(&capture_glob).map_err(|e| {
            anyhow!(
                "captureFilePattern '{}' with extension '{}' is not a valid glob pattern: {}",
                self.capture_file_pattern,
                self.extension,
                e
            )
        })?;

        Ok(())
    }

    /// Directory searched for captures
    ///
    /// `captureDir` is expanded for `~` and environment variables; a relative
    /// result is taken from `home`.
    pub fn capture_root(&self, home: &Path) -> PathBuf {
        home.join(expand_path(&self.capture_dir))
    }

    /// File name glob for captures: the pattern followed by the extension
    pub fn capture_glob(&self) -> String {
        format!("{}{}", self.capture_file_pattern, self.extension)
    }
}
