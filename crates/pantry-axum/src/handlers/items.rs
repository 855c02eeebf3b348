//! Item handlers - CRUD, list and search.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use pantry_core::{ItemInput, ItemListing, ItemType, Unit};
use serde::Deserialize;
use serde_json::Value;

use crate::dto::{ItemDto, ItemEnvelope, MessageResponse};
use crate::error::HttpError;
use crate::state::AppState;

const NAME_REQUIRED: &str = "Name query parameter is required.";

/// Query parameters for `GET /api/items`.
///
/// Both are kept as raw strings: an unknown `type` disables the filter and
/// an unknown `unit` falls back to grams.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub unit: Option<String>,
}

/// Query parameters for `GET /api/items/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// Parse a request body as JSON, ignoring `Content-Type`.
fn parse_body(body: &Bytes) -> Result<ItemInput, HttpError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| HttpError::BadRequest(format!("Invalid JSON body: {e}")))?;
    Ok(ItemInput::from_json(&value)?)
}

fn parse_id(raw: &str) -> Result<i64, HttpError> {
    raw.parse()
        .map_err(|_| HttpError::BadRequest(format!("Invalid item ID '{raw}'.")))
}

/// Create an item.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ItemEnvelope>), HttpError> {
    let item = state.items.create(parse_body(&body?)?).await?;
    Ok((StatusCode::CREATED, Json(ItemEnvelope::created(item))))
}

/// List items, optionally filtered by type and converted to a unit.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ItemListing>>, HttpError> {
    let type_filter = query.item_type.as_deref().and_then(ItemType::parse);
    let unit = query
        .unit
        .as_deref()
        .and_then(Unit::parse)
        .unwrap_or_default();

    Ok(Json(state.items.list(type_filter, unit).await?))
}

/// Search items by name substring.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ItemListing>>, HttpError> {
    let term = query
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| HttpError::BadRequest(NAME_REQUIRED.to_string()))?;

    Ok(Json(state.items.search(&term).await?))
}

/// Get a single item by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemDto>, HttpError> {
    let item = state.items.get(parse_id(&id)?).await?;
    Ok(Json(item.into()))
}

/// Replace an existing item.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ItemEnvelope>, HttpError> {
    let id = parse_id(&id)?;
    let input = parse_body(&body?)?;
    let item = state.items.update(id, input).await?;
    Ok(Json(ItemEnvelope::updated(item)))
}

/// Delete an item.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    state.items.delete(parse_id(&id)?).await?;
    Ok(Json(MessageResponse::deleted()))
}
