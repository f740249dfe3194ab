//! Handler for unknown routes.

use axum::http::Uri;

use crate::error::AppError;

/// Answers every unmatched route with a `not_found` error body.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
