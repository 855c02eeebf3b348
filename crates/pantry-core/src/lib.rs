//! Core domain for pantry: fruit and vegetable stock tracked in grams.
//!
//! This crate owns the item vocabulary, payload validation, the repository
//! port and the item service. Storage lives in `pantry-db`; HTTP lives in
//! `pantry-axum`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod import;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    GRAMS_PER_KILOGRAM, Item, ItemListing, ItemType, NewItem, Quantity, Unit,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{CoreError, ItemRepository, RepositoryError};
pub use services::ItemService;
pub use validation::{FieldViolation, ItemInput, ValidationError};
