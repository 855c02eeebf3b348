//! HTTP handlers.
//!
//! Handlers are thin: they parse the request, call `ItemService`, and
//! shape the response. Errors flow back as [`HttpError`](crate::error::HttpError).

pub mod items;
pub mod upload;
