//! Fallback for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Returns `404 Not Found` with a JSON error body.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
