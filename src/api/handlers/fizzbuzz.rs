//! Handler for FizzBuzz generation endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::fizzbuzz::{GenerateQuery, GenerateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Generates a FizzBuzz sequence and counts the request.
///
/// # Endpoint
///
/// `GET /api/v1/fizzbuzz`
///
/// # Query Parameters
///
/// - `int1` (required): First divisor, non-zero
/// - `int2` (required): Second divisor, non-zero and different from `int1`
/// - `limit` (optional): Last number of the sequence (default: 100)
/// - `str1` (required): Replacement for multiples of `int1`
/// - `str2` (required): Replacement for multiples of `int2`
///
/// A repeated parameter keeps its first value.
///
/// # Response
///
/// ```json
/// { "result": "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with kind `failed_to_parse_<field>` for malformed
/// numbers, or `invalid_input` for invariant violations.
/// Returns 500 Internal Server Error if the hit could not be recorded.
pub async fn fizzbuzz_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<GenerateResponse>, AppError> {
    let input = GenerateQuery::from_pairs(pairs)
        .into_input()
        .inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to parse query parameters");
        })?;

    let result = state
        .fizzbuzz_service
        .generate_and_record(&input)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::Validation(_)) {
                tracing::warn!(error = %e, "Rejected FizzBuzz input");
            }
        })?;

    Ok(Json(GenerateResponse { result }))
}
