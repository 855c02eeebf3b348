//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Parse/validate CLI-specific input
//! 2. Call `ItemService` methods
//! 3. Format output for the terminal

pub mod import;
pub mod list;
pub mod paths;
pub mod serve;
