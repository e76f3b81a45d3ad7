//! CLI argument parsing for dailycode.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dailycode: writes a dated Rust file of textbook algorithm snippets.
///
/// Run without a subcommand to generate today's file in the current
/// directory.
#[derive(Parser, Debug)]
#[command(name = "dailycode")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file (defaults apply when omitted).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for dailycode.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a daily file.
    ///
    /// Picks snippets from the catalog, renders the header, and writes
    /// `daily_code_<date>.rs`, replacing any file of the same name.
    Generate(GenerateArgs),

    /// List the snippet catalog.
    Catalog(CatalogArgs),

    /// Run the algorithm library demonstration.
    Demo,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Date stamp to embed instead of today's date.
    ///
    /// Any text is embedded in the header; line breaks become extra header
    /// lines. Stamps containing `/`, `\` or `..` are refused when writing.
    #[arg(long)]
    pub date: Option<String>,

    /// Directory to write into (overrides config `output_dir`).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Seed the selection for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of snippets to include (overrides config `snippets_per_file`).
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Print the document to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `catalog` command.
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
