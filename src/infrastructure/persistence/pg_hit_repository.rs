//! PostgreSQL implementation of the hit repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{FizzBuzzInput, FizzBuzzRecord};
use crate::domain::repositories::HitRepository;
use crate::error::AppError;

/// PostgreSQL repository for hit counting.
///
/// Rows live in `fizzbuzz_requests`, unique on
/// `(int1, int2, max_limit, str1, str2)`. The increment is expressed as
/// `INSERT .. ON CONFLICT .. DO UPDATE`, so concurrent requests for the same
/// key are serialized by PostgreSQL itself.
pub struct PgHitRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct HitRow {
    int1: i64,
    int2: i64,
    max_limit: i64,
    str1: String,
    str2: String,
    hits: i64,
}

impl From<HitRow> for FizzBuzzRecord {
    fn from(row: HitRow) -> Self {
        FizzBuzzRecord::new(
            FizzBuzzInput::new(row.int1, row.int2, row.max_limit, row.str1, row.str2),
            row.hits,
        )
    }
}

impl PgHitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Deletes every recorded hit.
    ///
    /// Administrative operation, not reachable from the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn reset(&self) -> Result<(), AppError> {
        sqlx::query("TRUNCATE TABLE fizzbuzz_requests RESTART IDENTITY")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    /// Counts distinct recorded combinations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_combinations(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fizzbuzz_requests")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl HitRepository for PgHitRepository {
    async fn record_hit(&self, input: &FizzBuzzInput) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO fizzbuzz_requests (int1, int2, max_limit, str1, str2, hits)
            VALUES ($1, $2, $3, $4, $5, 1)
            ON CONFLICT (int1, int2, max_limit, str1, str2)
            DO UPDATE SET hits = fizzbuzz_requests.hits + 1
            "#,
        )
        .bind(input.int1)
        .bind(input.int2)
        .bind(input.limit)
        .bind(&input.str1)
        .bind(&input.str2)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn top_hit(&self) -> Result<FizzBuzzRecord, AppError> {
        let row = sqlx::query_as::<_, HitRow>(
            r#"
            SELECT int1, int2, max_limit, str1, str2, hits
            FROM fizzbuzz_requests
            ORDER BY hits DESC,
                     int1 ASC,
                     int2 ASC,
                     max_limit ASC,
                     str1 COLLATE "C" ASC,
                     str2 COLLATE "C" ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(FizzBuzzRecord::from)
            .ok_or_else(|| AppError::not_found("No FizzBuzz request recorded yet"))
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
