//! In-memory implementation of the `ItemRepository` trait.
//!
//! Backs `serve --in-memory` and tests that do not need `SQLite`. Contents
//! are lost when the process exits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pantry_core::{Item, ItemRepository, ItemType, NewItem, RepositoryError};

use super::row_mappers::fold_name;

#[derive(Default)]
struct Store {
    items: BTreeMap<i64, Item>,
    last_id: i64,
}

/// Item repository kept entirely in process memory.
///
/// IDs are assigned from a monotonically increasing counter and never
/// reused, matching the `SQLite` `AUTOINCREMENT` behavior.
#[derive(Default)]
pub struct MemoryItemRepository {
    store: RwLock<Store>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_name(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    items
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError> {
        self.store
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Item with ID {id}")))
    }

    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.store.read().await.items.values().cloned().collect())
    }

    async fn list_by_type(&self, item_type: ItemType) -> Result<Vec<Item>, RepositoryError> {
        let store = self.store.read().await;
        let items = store
            .items
            .values()
            .filter(|item| item.item_type == item_type)
            .cloned()
            .collect();
        Ok(sorted_by_name(items))
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Item>, RepositoryError> {
        let needle = fold_name(term);
        let store = self.store.read().await;
        let items = store
            .items
            .values()
            .filter(|item| fold_name(&item.name).contains(&needle))
            .cloned()
            .collect();
        Ok(sorted_by_name(items))
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let item = item.clone().with_id(store.last_id);
        store.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        match store.items.get_mut(&item.id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("Item with ID {}", item.id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.store
            .write()
            .await
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Item with ID {id}")))
    }
}
