//! File operation functionality
//!
//! This module contains the methods that copy or move the capture.

use std::fs::rename;
use std::io;

use fs_extra::error::{Error as CopyError, ErrorKind as CopyErrorKind};
use fs_extra::file::{CopyOptions, copy};

use crate::errors::{Result, file_operation_error};

use super::relocation::{FileAction, Relocation};

impl Relocation {
    /// Performs the file action (copy or move)
    ///
    /// Copying streams the source into the target, truncating any file that
    /// is already there. Moving is a plain rename, so moving across
    /// filesystems fails instead of falling back to copy and delete.
    ///
    /// # Returns
    /// * `Result<()>` - Ok if the operation succeeds, or an error if it fails
    pub(crate) fn perform_file_action(&self) -> Result<()> {
        match self.action {
            FileAction::Copy => {
                let options = CopyOptions {
                    overwrite: true,
                    ..CopyOptions::new()
                };
                copy(&self.source, &self.target, &options).map_err(|e| {
                    file_operation_error(into_io_error(e), self.source.clone(), "copy")
                })?;
            }
            FileAction::Move => {
                rename(&self.source, &self.target)
                    .map_err(|e| file_operation_error(e, self.source.clone(), "move"))?;
            }
        }
        Ok(())
    }
}

// fs_extra replaces the message of most io errors with a generic one, so
// the wrapped io::Error is returned as is
fn into_io_error(error: CopyError) -> io::Error {
    let kind = match error.kind {
        CopyErrorKind::Io(source) => return source,
        CopyErrorKind::NotFound => io::ErrorKind::NotFound,
        CopyErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
        CopyErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
        CopyErrorKind::Interrupted => io::ErrorKind::Interrupted,
        _ => io::ErrorKind::Other,
    };
    io::Error::new(kind, error)
}
