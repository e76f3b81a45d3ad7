//! Dailycode: writes a dated Rust file of textbook algorithm snippets.
//!
//! This is the main entry point for the `dailycode` CLI. It parses arguments,
//! sets up logging, dispatches to the command handler, and maps errors onto
//! exit codes.

use dailycode::cli::Cli;
use dailycode::{commands, exit_codes};
use log::LevelFilter;
use std::process::ExitCode;

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // RUST_LOG, when set, takes precedence over the flag.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            log::debug!("command failed: {:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
