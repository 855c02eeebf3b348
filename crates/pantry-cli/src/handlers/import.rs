//! Import command handler.
//!
//! Applies the same rules as the upload endpoint: the file must carry the
//! `json` extension and hold a top-level array, and the first failing entry
//! aborts the import.

use std::path::Path;

use anyhow::{Context, Result};
use pantry_core::Item;
use pantry_core::import::{ensure_json_file, parse_document};

use crate::bootstrap::CliContext;

/// Execute the import command, returning the created items.
pub async fn execute(ctx: &CliContext, file: &Path) -> Result<Vec<Item>> {
    ensure_json_file(file.file_name().and_then(|name| name.to_str()))?;

    let contents = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let entries = parse_document(&contents)?;

    let items = ctx.items().import(entries).await?;

    println!("Imported {} item(s) from {}", items.len(), file.display());
    for item in &items {
        println!(
            "  #{:<5} {:<30} {:>10} g  {}",
            item.id, item.name, item.quantity, item.item_type
        );
    }

    Ok(items)
}
