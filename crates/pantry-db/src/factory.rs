//! Composition utilities for building an `ItemService` over a storage backend.
//!
//! This module provides factory functions for wiring up the application
//! with concrete repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use pantry_core::{ItemRepository, ItemService};

use crate::repositories::{MemoryItemRepository, SqliteItemRepository};
use crate::setup::setup_database;

/// Factory for creating repository and service instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Open (creating if needed) the `SQLite` database at `db_path`.
    pub async fn create_pool(db_path: &Path) -> anyhow::Result<SqlitePool> {
        setup_database(db_path).await
    }

    /// Create an `SQLite`-backed item repository from a pool.
    pub fn item_repository(pool: SqlitePool) -> Arc<dyn ItemRepository> {
        Arc::new(SqliteItemRepository::new(pool))
    }

    /// Create an empty in-memory item repository.
    pub fn memory_item_repository() -> Arc<dyn ItemRepository> {
        Arc::new(MemoryItemRepository::new())
    }

    /// Build an `ItemService` backed by `SQLite`.
    ///
    /// ```ignore
    /// let pool = CoreFactory::create_pool(&db_path).await?;
    /// let items = CoreFactory::build_item_service(pool);
    /// ```
    pub fn build_item_service(pool: SqlitePool) -> ItemService {
        ItemService::new(Self::item_repository(pool))
    }

    /// Build an `ItemService` whose data lives only in process memory.
    pub fn build_memory_item_service() -> ItemService {
        ItemService::new(Self::memory_item_repository())
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create an item repository using this test database.
    pub fn item_repository(&self) -> SqliteItemRepository {
        SqliteItemRepository::new(self.pool.clone())
    }

    /// Build an item service using this test database.
    pub fn item_service(&self) -> ItemService {
        ItemService::new(Arc::new(self.item_repository()))
    }
}
