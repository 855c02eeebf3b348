//! Item domain types.
//!
//! These types represent tracked produce, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use serde::{Deserialize, Serialize};

/// Number of grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: u64 = 1000;

// ─────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of produce an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Fruit,
    Vegetable,
}

impl ItemType {
    /// All accepted item types, in display order.
    pub const ALL: [Self; 2] = [Self::Fruit, Self::Vegetable];

    /// Parse an item type from its wire representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fruit" => Some(Self::Fruit),
            "vegetable" => Some(Self::Vegetable),
            _ => None,
        }
    }

    /// Convert the item type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit of mass.
///
/// Grams are the canonical storage unit; kilograms only exist at the edges
/// (caller input and list projections).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "kg")]
    Kilograms,
}

impl Unit {
    /// All accepted units, in display order.
    pub const ALL: [Self; 2] = [Self::Grams, Self::Kilograms];

    /// Parse a unit from its wire representation (`g` or `kg`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "g" => Some(Self::Grams),
            "kg" => Some(Self::Kilograms),
            _ => None,
        }
    }

    /// Convert the unit to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
        }
    }

    /// Convert `amount` expressed in this unit into grams.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn to_grams(self, amount: u64) -> Option<u64> {
        match self {
            Self::Grams => Some(amount),
            Self::Kilograms => amount.checked_mul(GRAMS_PER_KILOGRAM),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Item Types
// ─────────────────────────────────────────────────────────────────────────────

/// An item that exists in the store with an assigned ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned ID, immutable after creation.
    pub id: i64,
    pub name: String,
    /// Quantity in grams, whatever unit the caller submitted.
    pub quantity: u64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Unit the item was last submitted with. Metadata only: `quantity`
    /// is always grams.
    pub unit: Unit,
}

/// An item to be inserted into the store (no ID yet).
///
/// After insertion, the repository returns an `Item` with the assigned ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    /// Quantity in grams.
    pub quantity: u64,
    pub item_type: ItemType,
    pub unit: Unit,
}

impl NewItem {
    /// Attach a store-assigned ID.
    #[must_use]
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            item_type: self.item_type,
            unit: self.unit,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Projections
// ─────────────────────────────────────────────────────────────────────────────

/// A quantity as presented to callers.
///
/// Whole values serialize as JSON integers, fractional kilogram values as
/// decimals (`1500 g` in `kg` becomes `1.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Whole(u64),
    Fractional(f64),
}

impl Quantity {
    /// Express a gram amount in kilograms.
    #[must_use]
    pub fn kilograms_from_grams(grams: u64) -> Self {
        if grams % GRAMS_PER_KILOGRAM == 0 {
            Self::Whole(grams / GRAMS_PER_KILOGRAM)
        } else {
            #[allow(clippy::cast_precision_loss)]
            Self::Fractional(grams as f64 / GRAMS_PER_KILOGRAM as f64)
        }
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self::Whole(value)
    }
}

/// Read projection returned by list and search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListing {
    pub id: i64,
    pub name: String,
    pub quantity: Quantity,
    pub unit: Unit,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl ItemListing {
    /// Project an item for a list request in `requested` units.
    ///
    /// Conversion to kilograms only happens when the item's unit of record
    /// is grams. Every stored item is normalized to grams on write, so in
    /// practice this always converts; the gate is kept for parity with
    /// older records.
    #[must_use]
    pub fn for_list(item: Item, requested: Unit) -> Self {
        let quantity = match (requested, item.unit) {
            (Unit::Kilograms, Unit::Grams) => Quantity::kilograms_from_grams(item.quantity),
            (Unit::Kilograms | Unit::Grams, _) => Quantity::Whole(item.quantity),
        };

        Self {
            id: item.id,
            name: item.name,
            quantity,
            unit: requested,
            item_type: item.item_type,
        }
    }

    /// Project an item for a search result: grams, stored unit of record.
    #[must_use]
    pub fn for_search(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: Quantity::Whole(item.quantity),
            unit: item.unit,
            item_type: item.item_type,
        }
    }
}
