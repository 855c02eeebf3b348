//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and the
//! mapping from `CoreError` to HTTP status codes and response bodies.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pantry_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Message for a request body over the size limit.
pub const BODY_TOO_LARGE: &str = "Request body is too large.";

impl HttpError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Classify an extractor rejection by the status axum assigned it.
    ///
    /// Oversized bodies keep their 413; other client errors surface
    /// `client_message` as a 400; anything else is internal.
    pub fn from_rejection(status: StatusCode, client_message: &str, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(BODY_TOO_LARGE.to_string())
        } else if status.is_client_error() {
            Self::BadRequest(client_message.to_string())
        } else {
            Self::Internal(detail)
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::PayloadTooLarge(msg) => msg,
            Self::Internal(msg) => {
                tracing::error!(target: "pantry.http", error = %msg, "Request failed");
                msg
            }
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<BytesRejection> for HttpError {
    fn from(rejection: BytesRejection) -> Self {
        let detail = rejection.body_text();
        Self::from_rejection(rejection.status(), &detail, detail.clone())
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(violations) => Self::BadRequest(violations.to_string()),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::MalformedInput(msg) => Self::BadRequest(msg),
            CoreError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => Self::Internal(format!("Serialization: {msg}")),
        }
    }
}
