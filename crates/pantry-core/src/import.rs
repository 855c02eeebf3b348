//! Bulk import document handling.
//!
//! An import document is a JSON file whose top level is an array of item
//! payloads. Both the upload endpoint and the CLI go through these helpers
//! before handing entries to [`ItemService::import`](crate::services::ItemService::import).

use std::path::Path;

use serde_json::Value;

use crate::ports::CoreError;

/// Message for any document that is not a JSON array.
pub const INVALID_DOCUMENT: &str = "Invalid JSON format in the file.";

/// Message for a missing upload or a file without the `json` extension.
pub const INVALID_FILE: &str = "Invalid file. Please upload a JSON file.";

/// Whether a client-supplied file name carries the `json` extension.
///
/// The extension is whatever follows the last `.` of the final path
/// component, so a bare `.json` counts. The comparison is case-sensitive.
pub fn has_json_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, ext)| ext == "json")
}

/// Reject file names without the `json` extension.
pub fn ensure_json_file(file_name: Option<&str>) -> Result<(), CoreError> {
    match file_name {
        Some(name) if has_json_extension(name) => Ok(()),
        _ => Err(CoreError::MalformedInput(INVALID_FILE.to_string())),
    }
}

/// Parse an import document into its entries.
pub fn parse_document(contents: &[u8]) -> Result<Vec<Value>, CoreError> {
    match serde_json::from_slice::<Value>(contents) {
        Ok(Value::Array(entries)) => Ok(entries),
        Ok(_) | Err(_) => Err(CoreError::MalformedInput(INVALID_DOCUMENT.to_string())),
    }
}
