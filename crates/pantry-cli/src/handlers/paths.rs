//! Paths command handler.
//!
//! Displays resolved paths for diagnostics.

use anyhow::Result;
use pantry_core::paths::{DATA_DIR_ENV, data_root};

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Prints `key = value` lines for the data root and the database file.
pub fn execute(config: &CliConfig) -> Result<()> {
    let root = data_root()?;
    let overridden = std::env::var_os(DATA_DIR_ENV).is_some();

    println!(
        "data_root = {}{}",
        root.display(),
        if overridden {
            format!(" (from {DATA_DIR_ENV})")
        } else {
            String::new()
        }
    );
    println!("database = {}", config.database.display());
    Ok(())
}
