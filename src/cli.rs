use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description};

use crate::constants::{
    APPLICATION, CONFIG_HELP, COPY_HELP, DESTINATION_HELP, FILE_HELP, LOG_FILE_HELP, SEQ_HELP,
    VERBOSE_HELP,
};
use crate::errors::{Result, path_operation_error};
use crate::logging::LogLevel;
use crate::processor::RelocateOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `destination`: Directory the capture goes to (required, exactly one)
/// - `copy`: Copy instead of move
/// - `seq`: Sequential naming
/// - `file`: Explicit file name
/// - `config`: Path to the configuration file
/// - `verbose`: Increase verbosity level
/// - `log_file`: Additional log file
pub fn build_command() -> Command {
    let arg_destination = Arg::new("destination")
        .help(DESTINATION_HELP)
        .required(true)
        .num_args(1)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_copy = Arg::new("copy")
        .short('c')
        .long("copy")
        .help(COPY_HELP)
        .action(ArgAction::SetTrue);

    // --seq and --file are checked against each other by the relocator
    let arg_seq = Arg::new("seq")
        .short('s')
        .long("seq")
        .help(SEQ_HELP)
        .action(ArgAction::SetTrue);

    let arg_file = Arg::new("file")
        .short('f')
        .long("file")
        .help(FILE_HELP)
        .value_name("NAME");

    let arg_config = Arg::new("config")
        .long("config")
        .help(CONFIG_HELP)
        .value_name("PATH")
        .value_parser(clap::value_parser!(PathBuf));

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .value_name("PATH");

    command!()
        .name(APPLICATION)
        .author(crate_authors!())
        .about(crate_description!())
        .arg(arg_destination)
        .arg(arg_copy)
        .arg(arg_seq)
        .arg(arg_file)
        .arg(arg_config)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments
///
/// Usage errors make clap print the message and exit with status 2.
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the destination directory argument
pub fn get_destination(matches: &ArgMatches) -> Result<PathBuf> {
    matches
        .get_one::<PathBuf>("destination")
        .cloned()
        .ok_or_else(|| path_operation_error(PathBuf::new(), "read destination"))
}

/// Collects the relocation options from the command-line arguments
pub fn get_relocate_options(matches: &ArgMatches) -> RelocateOptions {
    RelocateOptions {
        copy: matches.get_flag("copy"),
        sequential: matches.get_flag("seq"),
        file_name: matches
            .get_one::<String>("file")
            .filter(|name| !name.is_empty())
            .cloned(),
    }
}

/// Gets the configuration file given on the command line, if any
pub fn get_config_override(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("config").cloned()
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Gets the additional log file, if any
pub fn get_log_file(matches: &ArgMatches) -> Option<String> {
    matches.get_one::<String>("log_file").cloned()
}
