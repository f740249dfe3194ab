//! DTOs for the FizzBuzz statistics endpoint.

use serde::Serialize;

use crate::domain::entities::FizzBuzzRecord;

/// The most requested parameter combination.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub int1: i64,
    pub int2: i64,
    pub limit: i64,
    pub str1: String,
    pub str2: String,
    pub hits: i64,
}

impl From<FizzBuzzRecord> for StatsResponse {
    fn from(record: FizzBuzzRecord) -> Self {
        let FizzBuzzRecord { input, hits } = record;

        Self {
            int1: input.int1,
            int2: input.int2,
            limit: input.limit,
            str1: input.str1,
            str2: input.str2,
            hits,
        }
    }
}
