//! Repository implementations.
//!
//! The `SQLite` implementation encapsulates all SQL queries and database
//! access; the `SqlitePool` is confined to this module and never exposed
//! through the port trait signatures.

mod memory_item_repository;
mod row_mappers;
mod sqlite_item_repository;

pub use memory_item_repository::MemoryItemRepository;
pub use sqlite_item_repository::SqliteItemRepository;
