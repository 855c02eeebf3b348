//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, filesystem).
//!
//! # Structure
//!
//! - `item` - Item types (`Item`, `NewItem`), the unit/type vocabulary and
//!   read projections

mod item;

pub use item::{
    GRAMS_PER_KILOGRAM, Item, ItemListing, ItemType, NewItem, Quantity, Unit,
};
