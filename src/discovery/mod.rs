//! File discovery module
//!
//! This module contains components for globbing directories and choosing the
//! latest capture among the matches.

mod scanner;
mod selector;

pub use scanner::glob_files;
pub use selector::{find_latest_capture, latest_match};
