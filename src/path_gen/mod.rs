//! Path generation module
//!
//! This module contains components for naming the relocated capture.

mod naming;

pub use naming::{NamingMode, destination_file_name, sequential_file_name};
