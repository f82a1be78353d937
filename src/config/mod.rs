//! Configuration module
//!
//! This module contains components for locating, loading and validating
//! the capture configuration.

mod loader;
mod model;

pub use loader::{config_folder, default_config_path, expand_path, load_config};
pub use model::Config;
