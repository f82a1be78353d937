use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::debug;

use mvsc::constants::{EXIT_FATAL, EXIT_PRECONDITION};
use mvsc::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = get_log_file(&matches);
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Error: failed to initialise logging: {e:#}");
        return ExitCode::from(EXIT_FATAL);
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let is_precondition = e
                .downcast_ref::<Error>()
                .is_some_and(Error::is_precondition_failure);
            if is_precondition {
                ExitCode::from(EXIT_PRECONDITION)
            } else {
                ExitCode::from(EXIT_FATAL)
            }
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let home = find_home_dir()?;

    let config_path =
        get_config_override(matches).unwrap_or_else(|| default_config_path(&home));
    debug!("Reading configuration from {}", config_path.display());
    let config = load_config(&config_path)?;

    let destination = get_destination(matches)?;
    let options = get_relocate_options(matches);

    relocate(&config, &home, &destination, &options)?;

    Ok(())
}
