//! List command handler.

use anyhow::Result;
use pantry_core::{ItemListing, ItemType, Unit};

use crate::bootstrap::CliContext;

/// Render listings as table rows, header first.
pub fn render(items: &[ItemListing]) -> Vec<String> {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(format!(
        "{:<6} {:<30} {:>12} {:<4} {}",
        "ID", "Name", "Quantity", "Unit", "Type"
    ));
    for item in items {
        let quantity = serde_json::to_string(&item.quantity).unwrap_or_default();
        lines.push(format!(
            "{:<6} {:<30} {:>12} {:<4} {}",
            item.id, item.name, quantity, item.unit, item.item_type
        ));
    }
    lines
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, item_type: Option<ItemType>, unit: Unit) -> Result<()> {
    let items = ctx.items().list(item_type, unit).await?;

    if items.is_empty() {
        println!("No items found.");
        println!("Use 'pantry import <FILE>' or POST /api/items to add some.");
        return Ok(());
    }

    for line in render(&items) {
        println!("{line}");
    }
    Ok(())
}
