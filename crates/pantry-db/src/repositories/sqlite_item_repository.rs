//! `SQLite` implementation of the `ItemRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use pantry_core::{Item, ItemRepository, ItemType, NewItem, RepositoryError};

use super::row_mappers::{
    ITEM_SELECT_COLUMNS, escape_like, fold_name, quantity_to_column, row_to_item, storage_error,
};

/// `SQLite` implementation of the `ItemRepository` trait.
///
/// This struct holds a connection pool and implements all CRUD operations
/// for items using `SQLite`.
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new `SQLite` item repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn get_by_id(&self, id: i64) -> Result<Item, RepositoryError> {
        let query = format!("SELECT {ITEM_SELECT_COLUMNS} FROM items WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Item with ID {id}")))?;

        row_to_item(&row)
    }

    async fn list(&self) -> Result<Vec<Item>, RepositoryError> {
        let query = format!("SELECT {ITEM_SELECT_COLUMNS} FROM items ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn list_by_type(&self, item_type: ItemType) -> Result<Vec<Item>, RepositoryError> {
        let query = format!(
            "SELECT {ITEM_SELECT_COLUMNS} FROM items WHERE type = ? ORDER BY name ASC, id ASC"
        );

        let rows = sqlx::query(&query)
            .bind(item_type.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Item>, RepositoryError> {
        let query = format!(
            "SELECT {ITEM_SELECT_COLUMNS} FROM items \
             WHERE name_folded LIKE '%' || ? || '%' ESCAPE '\\' \
             ORDER BY name ASC, id ASC"
        );

        let rows = sqlx::query(&query)
            .bind(escape_like(&fold_name(term)))
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO items (name, name_folded, quantity, type, unit) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(fold_name(&item.name))
        .bind(quantity_to_column(item.quantity)?)
        .bind(item.item_type.as_str())
        .bind(item.unit.as_str())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(item.clone().with_id(result.last_insert_rowid()))
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE items SET name = ?, name_folded = ?, quantity = ?, type = ?, unit = ? \
             WHERE id = ?",
        )
        .bind(&item.name)
        .bind(fold_name(&item.name))
        .bind(quantity_to_column(item.quantity)?)
        .bind(item.item_type.as_str())
        .bind(item.unit.as_str())
        .bind(item.id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Item with ID {}", item.id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Item with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use pantry_core::Unit;

    async fn repo() -> SqliteItemRepository {
        SqliteItemRepository::new(setup_test_database().await.unwrap())
    }

    fn new_item(name: &str, quantity: u64, item_type: ItemType) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            item_type,
            unit: Unit::Grams,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = repo().await;

        let created = repo
            .insert(&new_item("Apple", 1500, ItemType::Fruit))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = repo().await;
        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = repo().await;

        let first = repo.insert(&new_item("Apple", 1, ItemType::Fruit)).await.unwrap();
        let second = repo.insert(&new_item("Pear", 1, ItemType::Fruit)).await.unwrap();
        repo.delete(second.id).await.unwrap();
        let third = repo.insert(&new_item("Plum", 1, ItemType::Fruit)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_list_orders_by_id_and_filter_orders_by_name() {
        let repo = repo().await;
        repo.insert(&new_item("Pear", 10, ItemType::Fruit)).await.unwrap();
        repo.insert(&new_item("Leek", 20, ItemType::Vegetable)).await.unwrap();
        repo.insert(&new_item("Apple", 30, ItemType::Fruit)).await.unwrap();

        let all: Vec<_> = repo.list().await.unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(all, vec!["Pear", "Leek", "Apple"]);

        let fruit: Vec<_> = repo
            .list_by_type(ItemType::Fruit)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(fruit, vec!["Apple", "Pear"]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let repo = repo().await;
        repo.insert(&new_item("Green Apple", 10, ItemType::Fruit)).await.unwrap();
        repo.insert(&new_item("apple", 20, ItemType::Fruit)).await.unwrap();
        repo.insert(&new_item("Carrot", 30, ItemType::Vegetable)).await.unwrap();

        let hits: Vec<_> = repo
            .search_by_name("APP")
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(hits, vec!["Green Apple", "apple"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let repo = repo().await;
        repo.insert(&new_item("Apple", 10, ItemType::Fruit)).await.unwrap();
        repo.insert(&new_item("100% Juice", 20, ItemType::Fruit)).await.unwrap();

        assert_eq!(repo.search_by_name("%").await.unwrap().len(), 1);
        assert!(repo.search_by_name("_pple").await.unwrap().is_empty());
        assert_eq!(repo.search_by_name("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let repo = repo().await;
        repo.insert(&new_item("Épinard", 10, ItemType::Vegetable)).await.unwrap();
        repo.insert(&new_item("Carrot", 20, ItemType::Vegetable)).await.unwrap();

        for term in ["épin", "ÉPIN", "Épinard"] {
            let hits = repo.search_by_name(term).await.unwrap();
            assert_eq!(hits.len(), 1, "term {term}");
            assert_eq!(hits[0].name, "Épinard");
        }
    }

    #[tokio::test]
    async fn test_search_sees_renamed_items() {
        let repo = repo().await;
        let mut item = repo.insert(&new_item("Apple", 10, ItemType::Fruit)).await.unwrap();
        item.name = "Ölkürbis".to_string();
        repo.update(&item).await.unwrap();

        assert!(repo.search_by_name("apple").await.unwrap().is_empty());
        assert_eq!(repo.search_by_name("ÖLK").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = repo().await;
        let created = repo.insert(&new_item("Apple", 10, ItemType::Fruit)).await.unwrap();

        let mut changed = created.clone();
        changed.name = "Red Apple".to_string();
        changed.quantity = 2000;
        repo.update(&changed).await.unwrap();
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), changed);

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.get_by_id(created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = repo().await;
        let ghost = new_item("Ghost", 1, ItemType::Fruit).with_id(77);
        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_stored_type_is_serialization_error() {
        let repo = repo().await;
        sqlx::query("PRAGMA ignore_check_constraints = ON")
            .execute(repo.pool())
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO items (name, name_folded, quantity, type, unit) \
             VALUES ('Rock', 'rock', 1, 'mineral', 'g')",
        )
            .execute(repo.pool())
            .await
            .unwrap();

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Serialization(_)));
    }
}
