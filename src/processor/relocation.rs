//! Relocation types
//!
//! This module contains the Relocation struct describing one capture being
//! moved or copied, and the options it is built from.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::path_gen::NamingMode;

/// What happens to the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Stream the bytes into the target; the source stays
    Copy,
    /// Rename the source onto the target
    Move,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Copy => write!(f, "Copied"),
            FileAction::Move => write!(f, "Moved"),
        }
    }
}

/// Options taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocateOptions {
    /// Copy instead of move
    pub copy: bool,
    /// Name the file with the next sequential number
    pub sequential: bool,
    /// Explicit base name for the file
    pub file_name: Option<String>,
}

impl RelocateOptions {
    /// The explicit file name, if one was given and is not empty
    pub fn explicit_name(&self) -> Option<&str> {
        self.file_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether the options ask for both sequential and explicit naming
    pub fn has_conflicting_names(&self) -> bool {
        self.sequential && self.explicit_name().is_some()
    }

    /// The naming mode the options select
    ///
    /// Sequential naming takes precedence; callers reject the conflicting
    /// combination before asking.
    pub fn naming_mode(&self) -> NamingMode {
        if self.sequential {
            NamingMode::Sequential
        } else if let Some(name) = self.explicit_name() {
            NamingMode::Explicit(name.to_string())
        } else {
            NamingMode::Original
        }
    }

    /// The file action the options select
    pub fn action(&self) -> FileAction {
        if self.copy {
            FileAction::Copy
        } else {
            FileAction::Move
        }
    }
}

/// A capture together with the place it goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    /// The capture being relocated
    pub(crate) source: PathBuf,
    /// The full destination path
    pub(crate) target: PathBuf,
    /// Copy or move
    pub(crate) action: FileAction,
}

impl Relocation {
    pub fn new(source: PathBuf, target: PathBuf, action: FileAction) -> Relocation {
        Relocation {
            source,
            target,
            action,
        }
    }

    /// Gets a reference to the source path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Gets a reference to the target path
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Gets the action performed
    pub fn action(&self) -> FileAction {
        self.action
    }
}
