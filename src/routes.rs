//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/v1/fizzbuzz`        - Sequence generation
//! - `GET /api/v1/fizzbuzz/stats`  - Most requested combination
//! - `GET /health`                 - Hit store health check
//!
//! Anything else answers `404` with a `not_found` error body.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Bounds the time spent per request
//! - **Path normalization** - Routes match with or without a trailing slash

use std::time::Duration;

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on the handling time of one request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::v1_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
