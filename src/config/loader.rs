//! Configuration loading functionality
//!
//! This module contains functions for locating and loading the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::from_str;
use shellexpand::{full, tilde};

use crate::constants::{APP_FOLDER, APPLICATION, CONFIG_FILE_ALT_NAME, CONFIG_FILE_NAME};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded and validated configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config: Config = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    config.validate()?;
    debug!("Loaded configuration from {}: {:?}", file.display(), config);

    Ok(config)
}

/// Folder holding the per-user configuration: `<home>/.app/mvsc`
pub fn config_folder(home: &Path) -> PathBuf {
    home.join(APP_FOLDER).join(APPLICATION)
}

/// Returns the configuration file to read
///
/// `config.yaml` in the configuration folder is preferred; `config.yml` is
/// used when only that one exists. When neither exists the `config.yaml`
/// path is returned so the read error names it.
pub fn default_config_path(home: &Path) -> PathBuf {
    let folder = config_folder(home);
    let primary = folder.join(CONFIG_FILE_NAME);
    if primary.exists() {
        return primary;
    }

    let alternative = folder.join(CONFIG_FILE_ALT_NAME);
    if alternative.exists() {
        alternative
    } else {
        primary
    }
}

/// Expands `~` and environment variables in a path
///
/// Unknown variables leave the path as it was apart from tilde expansion.
pub fn expand_path(path: &str) -> String {
    full(path)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_folder() {
        assert_eq!(
            config_folder(Path::new("/home/user")),
            PathBuf::from("/home/user/.app/mvsc")
        );
    }

    #[test]
    fn test_default_config_path_prefers_yaml() {
        let home = tempfile::tempdir().unwrap();
        let folder = config_folder(home.path());
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(CONFIG_FILE_NAME), "").unwrap();
        fs::write(folder.join(CONFIG_FILE_ALT_NAME), "").unwrap();

        assert_eq!(
            default_config_path(home.path()),
            folder.join(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_default_config_path_falls_back_to_yml() {
        let home = tempfile::tempdir().unwrap();
        let folder = config_folder(home.path());
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(CONFIG_FILE_ALT_NAME), "").unwrap();

        assert_eq!(
            default_config_path(home.path()),
            folder.join(CONFIG_FILE_ALT_NAME)
        );
    }

    #[test]
    fn test_default_config_path_when_missing() {
        let home = tempfile::tempdir().unwrap();
        assert_eq!(
            default_config_path(home.path()),
            config_folder(home.path()).join(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("Pictures/Screenshots"), "Pictures/Screenshots");
    }

    #[test]
    fn test_expand_path_keeps_unknown_variables() {
        assert_eq!(
            expand_path("$MVSC_SURELY_UNSET_VARIABLE/shots"),
            "$MVSC_SURELY_UNSET_VARIABLE/shots"
        );
    }
}
