//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod item_repository;

use thiserror::Error;

use crate::validation::ValidationError;

pub use item_repository::ItemRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be mapped back to a domain type.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., CHECK or NOT NULL).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item with the requested ID.
    #[error("{0}")]
    NotFound(String),

    /// The payload or document could not be understood at all.
    #[error("{0}")]
    MalformedInput(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CoreError {
    /// The not-found error for an item ID.
    pub fn item_not_found(id: i64) -> Self {
        Self::NotFound(format!("Item with ID {id} not found."))
    }
}
