//! Per-request timeout middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests that take longer than `timeout` with `408 Request Timeout`.
///
/// Sequence generation runs on the blocking pool and polls a cancellation
/// flag, so a timed out request also stops generating and records no hit.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
