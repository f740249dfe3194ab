//! DTOs for the FizzBuzz generation endpoint.

use serde::Serialize;

use crate::domain::entities::FizzBuzzInput;
use crate::error::{AppError, ParseField};

/// Sequence length used when `limit` is absent or empty.
pub const DEFAULT_LIMIT: i64 = 100;

/// Raw query string of `GET /api/v1/fizzbuzz`.
///
/// Kept as strings so a malformed number maps to a field-specific
/// [`AppError::Parse`] instead of a generic extractor rejection.
#[derive(Debug, Default)]
pub struct GenerateQuery {
    pub int1: Option<String>,
    pub int2: Option<String>,
    pub limit: Option<String>,
    pub str1: Option<String>,
    pub str2: Option<String>,
}

impl GenerateQuery {
    /// Collects the known parameters from raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "int1" => &mut query.int1,
                "int2" => &mut query.int2,
                "limit" => &mut query.limit,
                "str1" => &mut query.str1,
                "str2" => &mut query.str2,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    /// Parses the numeric fields in the order `int1`, `int2`, `limit`.
    ///
    /// Missing strings become empty and are rejected later by validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Parse`] for the first field that is not an integer.
    pub fn into_input(self) -> Result<FizzBuzzInput, AppError> {
        let int1 = parse_required(self.int1.as_deref(), ParseField::Int1)?;
        let int2 = parse_required(self.int2.as_deref(), ParseField::Int2)?;

        let limit = match self.limit.as_deref() {
            None | Some("") => DEFAULT_LIMIT,
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::parse(ParseField::Limit))?,
        };

        Ok(FizzBuzzInput {
            int1,
            int2,
            limit,
            str1: self.str1.unwrap_or_default(),
            str2: self.str2.unwrap_or_default(),
        })
    }
}

fn parse_required(raw: Option<&str>, field: ParseField) -> Result<i64, AppError> {
    raw.unwrap_or_default()
        .parse()
        .map_err(|_| AppError::parse(field))
}

/// Successful generation response.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}
