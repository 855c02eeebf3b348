//! Bulk upload handler.

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use pantry_core::import::{INVALID_FILE, ensure_json_file, parse_document};

use crate::dto::UploadResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Multipart field carrying the import document.
const FILE_FIELD: &str = "file";

/// Import every item from an uploaded JSON document.
///
/// Entries are created in order; the first failing entry aborts the upload
/// and earlier entries stay created.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), HttpError> {
    let mut multipart = multipart.map_err(|_| HttpError::BadRequest(INVALID_FILE.to_string()))?;

    while let Some(field) = multipart.next_field().await.map_err(read_failed)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        ensure_json_file(file_name.as_deref())?;

        let contents = field.bytes().await.map_err(read_failed)?;
        let entries = parse_document(&contents)?;

        tracing::info!(
            target: "pantry.import",
            file = file_name.as_deref().unwrap_or_default(),
            entries = entries.len(),
            "Processing upload"
        );

        let items = state.items.import(entries).await?;
        return Ok((StatusCode::CREATED, Json(UploadResponse::processed(items))));
    }

    Err(HttpError::BadRequest(INVALID_FILE.to_string()))
}

/// Malformed or oversized multipart bodies are client errors; only a
/// failing body stream is an internal one.
fn read_failed(err: MultipartError) -> HttpError {
    HttpError::from_rejection(
        err.status(),
        INVALID_FILE,
        format!("Failed to read uploaded file: {err}"),
    )
}
