//! API route configuration.

use crate::api::handlers::{fizzbuzz_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Version 1 of the public API, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `GET /fizzbuzz`        - Generate a sequence and count the request
/// - `GET /fizzbuzz/stats`  - Most requested parameter combination
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/fizzbuzz", get(fizzbuzz_handler))
        .route("/fizzbuzz/stats", get(stats_handler))
}
