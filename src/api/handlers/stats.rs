//! Handler for FizzBuzz request statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most requested parameter combination.
///
/// # Endpoint
///
/// `GET /api/v1/fizzbuzz/stats`
///
/// # Response
///
/// ```json
/// { "int1": 3, "int2": 5, "limit": 100, "str1": "fizz", "str2": "buzz", "hits": 42 }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if nothing was recorded yet or the
/// store fails.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let record = state.fizzbuzz_service.stats().await?;

    Ok(Json(record.into()))
}
