//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the pantry inventory service.
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Track fruit and vegetable stock over HTTP")]
#[command(version)]
pub struct Cli {
    /// Use this SQLite database file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
