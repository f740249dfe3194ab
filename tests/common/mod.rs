#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use sqlx::PgPool;
use std::sync::Arc;
use fizzbuzz_api::AppError;
use fizzbuzz_api::api::handlers::{fizzbuzz_handler, health_handler, stats_handler};
use fizzbuzz_api::domain::entities::{FizzBuzzInput, FizzBuzzRecord};
use fizzbuzz_api::domain::repositories::HitRepository;
use fizzbuzz_api::infrastructure::persistence::{InMemoryHitRepository, PgHitRepository};
use fizzbuzz_api::state::AppState;

/// A hit store whose every operation fails, as with a lost database.
pub struct FailingHitRepository;

#[async_trait]
impl HitRepository for FailingHitRepository {
    async fn record_hit(&self, _input: &FizzBuzzInput) -> Result<(), AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn top_hit(&self) -> Result<FizzBuzzRecord, AppError> {
        Err(AppError::internal("Database error"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryHitRepository::new()))
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingHitRepository))
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgHitRepository::new(Arc::new(pool))))
}

/// FizzBuzz routes as mounted by the application router.
pub fn fizzbuzz_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/fizzbuzz", get(fizzbuzz_handler))
        .route("/api/v1/fizzbuzz/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Seeds a combination with an exact hit count.
pub async fn create_test_hits(pool: &PgPool, input: &FizzBuzzInput, hits: i64) {
    sqlx::query(
        "INSERT INTO fizzbuzz_requests (int1, int2, max_limit, str1, str2, hits) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(input.int1)
    .bind(input.int2)
    .bind(input.limit)
    .bind(&input.str1)
    .bind(&input.str2)
    .bind(hits)
    .execute(pool)
    .await
    .unwrap();
}
