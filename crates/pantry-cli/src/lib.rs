//! Command-line interface for pantry.
//!
//! The `pantry` binary serves the HTTP API and offers a few offline
//! commands (bulk import, listing, path diagnostics) over the same store.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use parser::Cli;
