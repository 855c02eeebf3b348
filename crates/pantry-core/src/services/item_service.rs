//! Item service - orchestrates validation, persistence and read projections.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{Item, ItemListing, ItemType, Unit};
use crate::ports::{CoreError, ItemRepository, RepositoryError};
use crate::validation::ItemInput;

/// Service for item operations.
///
/// Inputs arrive already validated as [`ItemInput`]; this service turns
/// repository misses into [`CoreError::NotFound`] and shapes the unit-aware
/// projections returned by list and search.
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    /// Create a new item service with the given repository.
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new item and return it with its assigned ID.
    pub async fn create(&self, input: ItemInput) -> Result<Item, CoreError> {
        let submitted_unit = input.submitted_unit();
        let item = self.repo.insert(&input.into_new_item()).await?;

        tracing::info!(
            target: "pantry.items",
            id = item.id,
            name = %item.name,
            grams = item.quantity,
            item_type = %item.item_type,
            submitted_unit = %submitted_unit,
            "Item created"
        );
        Ok(item)
    }

    /// List items, optionally filtered by type, with quantities in `unit`.
    pub async fn list(
        &self,
        type_filter: Option<ItemType>,
        unit: Unit,
    ) -> Result<Vec<ItemListing>, CoreError> {
        let items = match type_filter {
            Some(item_type) => self.repo.list_by_type(item_type).await?,
            None => self.repo.list().await?,
        };

        Ok(items
            .into_iter()
            .map(|item| ItemListing::for_list(item, unit))
            .collect())
    }

    /// Get an item by ID.
    pub async fn get(&self, id: i64) -> Result<Item, CoreError> {
        self.repo.get_by_id(id).await.map_err(|e| not_found_as(e, id))
    }

    /// Replace every mutable field of an existing item.
    pub async fn update(&self, id: i64, input: ItemInput) -> Result<Item, CoreError> {
        let existing = self.get(id).await?;
        let item = input.into_new_item().with_id(existing.id);

        self.repo
            .update(&item)
            .await
            .map_err(|e| not_found_as(e, id))?;

        tracing::info!(
            target: "pantry.items",
            id,
            name = %item.name,
            grams = item.quantity,
            "Item updated"
        );
        Ok(item)
    }

    /// Delete an item by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        let item = self.get(id).await?;
        self.repo
            .delete(item.id)
            .await
            .map_err(|e| not_found_as(e, id))?;

        tracing::info!(target: "pantry.items", id, "Item deleted");
        Ok(())
    }

    /// Case-insensitive substring search on item names.
    ///
    /// Quantities are reported in grams with the stored unit of record.
    pub async fn search(&self, term: &str) -> Result<Vec<ItemListing>, CoreError> {
        let items = self.repo.search_by_name(term).await?;
        tracing::debug!(target: "pantry.items", term, matches = items.len(), "Item search");
        Ok(items.into_iter().map(ItemListing::for_search).collect())
    }

    /// Create one item per entry, in order.
    ///
    /// Any `id` supplied by the caller is discarded. Processing stops at the
    /// first entry that fails; items created before it are kept.
    pub async fn import(&self, entries: Vec<Value>) -> Result<Vec<Item>, CoreError> {
        let total = entries.len();
        let mut created = Vec::with_capacity(total);

        for (index, mut entry) in entries.into_iter().enumerate() {
            if let Value::Object(map) = &mut entry {
                map.remove("id");
            }

            let result = match ItemInput::from_json(&entry) {
                Ok(input) => self.create(input).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(item) => created.push(item),
                Err(e) => {
                    tracing::warn!(
                        target: "pantry.import",
                        entry = index,
                        created = created.len(),
                        total,
                        error = %e,
                        "Import aborted"
                    );
                    return Err(e);
                }
            }
        }

        tracing::info!(target: "pantry.import", created = created.len(), "Import finished");
        Ok(created)
    }
}

fn not_found_as(err: RepositoryError, id: i64) -> CoreError {
    match err {
        RepositoryError::NotFound(_) => CoreError::item_not_found(id),
        other => CoreError::Repository(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewItem, Quantity};
    use crate::ports::MockItemRepository;
    use mockall::predicate::eq;
    use serde_json::json;

    fn input(value: &Value) -> ItemInput {
        ItemInput::from_json(value).unwrap()
    }

    fn apple(id: i64, quantity: u64) -> Item {
        Item {
            id,
            name: "Apple".to_string(),
            quantity,
            item_type: ItemType::Fruit,
            unit: Unit::Grams,
        }
    }

    fn service(repo: MockItemRepository) -> ItemService {
        ItemService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_stores_grams() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .withf(|item: &NewItem| {
                item.name == "Banana"
                    && item.quantity == 2000
                    && item.item_type == ItemType::Fruit
                    && item.unit == Unit::Grams
            })
            .times(1)
            .returning(|item| Ok(item.clone().with_id(1)));

        let item = service(repo)
            .create(input(&json!({
                "name": "Banana",
                "quantity": 2,
                "type": "fruit",
                "unit": "kg",
            })))
            .await
            .unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Banana");
        assert_eq!(item.quantity, 2000);
        assert_eq!(item.item_type, ItemType::Fruit);
    }

    #[tokio::test]
    async fn test_list_with_filters_converts_to_kilograms() {
        let mut repo = MockItemRepository::new();
        repo.expect_list_by_type()
            .with(eq(ItemType::Fruit))
            .times(1)
            .returning(|_| Ok(vec![apple(1, 1000)]));
        repo.expect_list().never();

        let items = service(repo)
            .list(Some(ItemType::Fruit), Unit::Kilograms)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Quantity::Whole(1));
        assert_eq!(items[0].unit, Unit::Kilograms);
    }

    #[tokio::test]
    async fn test_list_without_filter_uses_all_items() {
        let mut repo = MockItemRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![apple(1, 1500), apple(2, 20)]));

        let items = service(repo).list(None, Unit::Grams).await.unwrap();

        let quantities: Vec<_> = items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![Quantity::Whole(1500), Quantity::Whole(20)]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(apple(id, 500)));
        repo.expect_update()
            .withf(|item: &Item| {
                item.id == 1 && item.name == "Updated Apple" && item.quantity == 700
            })
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(repo)
            .update(
                1,
                input(&json!({
                    "name": "Updated Apple",
                    "quantity": 700,
                    "type": "fruit",
                    "unit": "g",
                })),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Updated Apple");
        assert_eq!(updated.quantity, 700);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(apple(id, 500)));

        let item = service(repo).get(1).await.unwrap();
        assert_eq!(item.name, "Apple");
        assert_eq!(item.quantity, 500);
    }

    #[tokio::test]
    async fn test_delete_removes_existing_item() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(apple(id, 500)));
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        service(repo).delete(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_item_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .with(eq(999))
            .times(1)
            .returning(|id| Err(RepositoryError::NotFound(format!("Item with ID {id}"))));
        repo.expect_delete().never();

        let err = service(repo).delete(999).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        assert_eq!(err.to_string(), "Item with ID 999 not found.");
    }

    #[tokio::test]
    async fn test_storage_errors_are_not_masked_as_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::Storage("disk full".to_string())));

        let err = service(repo).get(3).await.unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[tokio::test]
    async fn test_search_reports_grams_and_stored_unit() {
        let mut repo = MockItemRepository::new();
        repo.expect_search_by_name()
            .withf(|term: &str| term == "app")
            .times(1)
            .returning(|_| Ok(vec![apple(4, 2500)]));

        let items = service(repo).search("app").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Quantity::Whole(2500));
        assert_eq!(items[0].unit, Unit::Grams);
    }

    #[tokio::test]
    async fn test_import_strips_ids() {
        let mut repo = MockItemRepository::new();
        let mut next_id = 10;
        repo.expect_insert().times(2).returning(move |item| {
            next_id += 1;
            Ok(item.clone().with_id(next_id))
        });

        let items = service(repo)
            .import(vec![
                json!({"id": 99, "name": "Apple", "quantity": 1, "type": "fruit", "unit": "kg"}),
                json!({"name": "Leek", "quantity": 300, "type": "vegetable", "unit": "g"}),
            ])
            .await
            .unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(items[0].quantity, 1000);
    }

    #[tokio::test]
    async fn test_import_stops_at_first_invalid_entry() {
        let mut repo = MockItemRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|item| Ok(item.clone().with_id(1)));

        let err = service(repo)
            .import(vec![
                json!({"name": "Apple", "quantity": 1, "type": "fruit", "unit": "kg"}),
                json!({"name": "Rock", "quantity": 1, "type": "mineral", "unit": "kg"}),
                json!({"name": "Leek", "quantity": 300, "type": "vegetable", "unit": "g"}),
            ])
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "type: The value you selected is not a valid choice."
        );
    }
}
