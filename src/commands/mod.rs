//! Command implementations for dailycode.
//!
//! Routes the parsed CLI onto its handler. Running with no subcommand is
//! the same as `generate` with no flags.

mod catalog;
mod demo;
mod generate;

pub use catalog::write_catalog;
pub use demo::write_demo;
pub use generate::{run_generate, write_document};

use crate::cli::{Cli, Command, GenerateArgs};
use crate::config::Config;
use crate::error::{DailyCodeError, Result};
use std::io;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config, command, ..
    } = cli;

    match command {
        None => generate::cmd_generate(load_config(config.as_deref())?, GenerateArgs::default()),
        Some(Command::Generate(args)) => generate::cmd_generate(load_config(config.as_deref())?, args),
        Some(Command::Catalog(args)) => catalog::cmd_catalog(args),
        Some(Command::Demo) => demo::cmd_demo(),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load_or_default(path)?;
    if let Some(path) = path {
        log::debug!("loaded config from {}", path.display());
    }
    Ok(config)
}

/// Map a failed write to stdout onto the crate error.
pub(crate) fn stdout_error(e: io::Error) -> DailyCodeError {
    DailyCodeError::Io(format!("failed to write to stdout: {}", e))
}
