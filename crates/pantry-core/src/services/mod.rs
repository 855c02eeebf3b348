//! Application services.
//!
//! Services sit between adapters and ports: they accept validated input,
//! talk to repositories through trait objects and return domain types.

mod item_service;

pub use item_service::ItemService;
