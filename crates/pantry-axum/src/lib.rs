//! Axum web server adapter for pantry.
//!
//! Exposes the item API under `/api` and wires a storage backend to
//! [`pantry_core::ItemService`] at startup.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are used by integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{
    AxumContext, CorsConfig, ServerConfig, StorageBackend, bootstrap, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
