//! Relocation of the latest capture
//!
//! Checks the invocation, finds the capture, names it and performs the copy
//! or move. Nothing on disk changes until every precondition has passed.

use std::path::{Path, absolute};

use log::{debug, info};

use crate::config::Config;
use crate::discovery::find_latest_capture;
use crate::errors::{
    Result, conflicting_naming_options_error, directory_not_found_error, file_operation_error,
};
use crate::logging::format_message;
use crate::path_gen::destination_file_name;

use super::relocation::{RelocateOptions, Relocation};

/// Moves or copies the latest capture into `destination`
///
/// # Arguments
/// * `config` - The capture configuration
/// * `home` - Home directory the capture directory is relative to
/// * `destination` - Existing directory receiving the capture
/// * `options` - Copy and naming options
///
/// # Returns
/// * `Result<Relocation>` - What was relocated and where to
///
/// # Errors
/// * Conflicting naming options when sequential and explicit naming are both set
/// * Directory not found when `destination` is missing or not a directory
/// * Capture not found when no file matches the configured pattern
/// * Any filesystem error raised while naming, copying or moving
pub fn relocate(
    config: &Config,
    home: &Path,
    destination: &Path,
    options: &RelocateOptions,
) -> Result<Relocation> {
    if options.has_conflicting_names() {
        return Err(conflicting_naming_options_error());
    }

    if !destination.is_dir() {
        return Err(directory_not_found_error(destination.to_path_buf()));
    }

    let destination = absolute(destination)
        .map_err(|e| file_operation_error(e, destination.to_path_buf(), "resolve"))?;
    debug!("Destination directory: {}", destination.display());

    let source = find_latest_capture(config, home)?;
    debug!("Latest capture: {}", source.display());

    let file_name = destination_file_name(&options.naming_mode(), &source, &destination, config)?;
    let relocation = Relocation::new(source, destination.join(file_name), options.action());

    relocation.perform_file_action()?;
    report(&relocation);

    Ok(relocation)
}

fn report(relocation: &Relocation) {
    let source = relocation.source().display().to_string();
    let target = relocation.target().display().to_string();
    let message = format!("{} {} -> {}", relocation.action(), source, target);
    let colored_message = format!(
        "{} {} -> {}",
        relocation.action(),
        source,
        colored::Colorize::bold(colored::Colorize::green(target.as_str()))
    );
    info!("{}", format_message(&message, &colored_message));
}
