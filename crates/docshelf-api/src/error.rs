//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use docshelf_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper carrying a domain error across the HTTP boundary.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts
/// `AppError` through the `From` impl below.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0.kind {
            ErrorKind::InvalidArgument => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_ARGUMENT"),
            ErrorKind::DuplicateName => (StatusCode::BAD_REQUEST, "DUPLICATE_NAME"),
            ErrorKind::FolderNotFound => (StatusCode::NOT_FOUND, "FOLDER_NOT_FOUND"),
            ErrorKind::DocumentNotFound => (StatusCode::NOT_FOUND, "DOCUMENT_NOT_FOUND"),
            ErrorKind::Internal => {
                tracing::error!(error = %self.0.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: self.0.message.clone(),
        };

        (status, Json(body)).into_response()
    }
}
