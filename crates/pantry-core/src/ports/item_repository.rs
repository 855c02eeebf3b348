//! Item repository trait definition.
//!
//! This port defines the interface for item persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Item, ItemType, NewItem};

/// Repository for item persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Quantities are always grams; no unit conversion happens here
/// - Name ordering is plain ascending string order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Get an item by its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError>;

    /// List every item, ordered by ID.
    async fn list(&self) -> Result<Vec<Item>, RepositoryError>;

    /// List items of one type, ordered by name ascending.
    async fn list_by_type(&self, item_type: ItemType) -> Result<Vec<Item>, RepositoryError>;

    /// Case-insensitive substring match on the name, ordered by name ascending.
    ///
    /// The term is matched literally; `%` and `_` are not wildcards.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Item>, RepositoryError>;

    /// Insert a new item and return it with its assigned ID.
    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError>;

    /// Overwrite an existing item. The ID is never changed.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;

    /// Delete an item by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the item doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
