//! File processing module
//!
//! This module contains components for relocating the latest capture,
//! including the relocation types and the file operations.

mod relocation;
mod file_operations;
mod relocator;

pub use relocation::{FileAction, RelocateOptions, Relocation};
pub use relocator::relocate;
