//! Item DTOs.

use pantry_core::{Item, ItemListing, ItemType};
use serde::{Deserialize, Serialize};

pub const CREATED: &str = "Item created successfully.";
pub const UPDATED: &str = "Item updated successfully.";
pub const DELETED: &str = "Item deleted successfully.";
pub const FILE_PROCESSED: &str = "File processed successfully.";

/// A single item as returned by create, get and update.
///
/// Quantity is in grams. The unit of record is not part of this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: i64,
    pub name: String,
    pub quantity: u64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            item_type: item.item_type,
        }
    }
}

/// `{message, item}` body for create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub message: String,
    pub item: ItemDto,
}

impl ItemEnvelope {
    pub fn created(item: Item) -> Self {
        Self {
            message: CREATED.to_string(),
            item: item.into(),
        }
    }

    pub fn updated(item: Item) -> Self {
        Self {
            message: UPDATED.to_string(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED.to_string(),
        }
    }
}

/// Body returned by a successful bulk upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub items: Vec<ItemListing>,
}

impl UploadResponse {
    pub fn processed(items: Vec<Item>) -> Self {
        Self {
            message: FILE_PROCESSED.to_string(),
            items: items.into_iter().map(ItemListing::for_search).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::Unit;
    use serde_json::json;

    fn banana() -> Item {
        Item {
            id: 1,
            name: "Banana".to_string(),
            quantity: 2000,
            item_type: ItemType::Fruit,
            unit: Unit::Grams,
        }
    }

    #[test]
    fn test_envelope_omits_unit() {
        let body = serde_json::to_value(ItemEnvelope::created(banana())).unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Item created successfully.",
                "item": {"id": 1, "name": "Banana", "quantity": 2000, "type": "fruit"},
            })
        );
    }

    #[test]
    fn test_upload_items_carry_unit() {
        let body = serde_json::to_value(UploadResponse::processed(vec![banana()])).unwrap();
        assert_eq!(
            body["items"][0],
            json!({"id": 1, "name": "Banana", "quantity": 2000, "unit": "g", "type": "fruit"})
        );
    }
}
