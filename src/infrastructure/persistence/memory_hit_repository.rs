//! Process-local hit repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::domain::entities::{FizzBuzzInput, FizzBuzzRecord};
use crate::domain::repositories::HitRepository;
use crate::error::AppError;

/// A hit repository backed by a mutex-guarded map.
///
/// Counts are lost on restart. Each increment happens inside one critical
/// section, which gives the same no-lost-update guarantee as the PostgreSQL
/// upsert.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`HIT_STORE=memory`)
/// - HTTP handler tests
pub struct InMemoryHitRepository {
    hits: Mutex<HashMap<FizzBuzzInput, i64>>,
}

impl InMemoryHitRepository {
    pub fn new() -> Self {
        debug!("Using in-memory hit store");
        Self {
            hits: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryHitRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::internal("Hit store lock poisoned")
}

#[async_trait]
impl HitRepository for InMemoryHitRepository {
    async fn record_hit(&self, input: &FizzBuzzInput) -> Result<(), AppError> {
        let mut hits = self.hits.lock().map_err(poisoned)?;
        *hits.entry(input.clone()).or_insert(0) += 1;
        Ok(())
    }

    async fn top_hit(&self) -> Result<FizzBuzzRecord, AppError> {
        let hits = self.hits.lock().map_err(poisoned)?;

        hits.iter()
            // highest count first, then smallest key
            .max_by(|(a_key, a_hits), (b_key, b_hits)| {
                a_hits.cmp(b_hits).then_with(|| b_key.cmp(a_key))
            })
            .map(|(input, count)| FizzBuzzRecord::new(input.clone(), *count))
            .ok_or_else(|| AppError::not_found("No FizzBuzz request recorded yet"))
    }

    async fn health_check(&self) -> bool {
        !self.hits.is_poisoned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fizzbuzz(limit: i64) -> FizzBuzzInput {
        FizzBuzzInput::new(3, 5, limit, "fizz", "buzz")
    }

    #[tokio::test]
    async fn test_top_hit_empty() {
        let repo = InMemoryHitRepository::new();

        let result = repo.top_hit().await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_record_hit_is_cumulative() {
        let repo = InMemoryHitRepository::new();

        repo.record_hit(&fizzbuzz(15)).await.unwrap();
        repo.record_hit(&fizzbuzz(15)).await.unwrap();

        let top = repo.top_hit().await.unwrap();
        assert_eq!(top.input, fizzbuzz(15));
        assert_eq!(top.hits, 2);
    }

    #[tokio::test]
    async fn test_distinct_keys_are_independent() {
        let repo = InMemoryHitRepository::new();

        repo.record_hit(&fizzbuzz(15)).await.unwrap();
        repo.record_hit(&fizzbuzz(16)).await.unwrap();

        let hits = repo.hits.lock().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[&fizzbuzz(15)], 1);
        assert_eq!(hits[&fizzbuzz(16)], 1);
    }

    #[tokio::test]
    async fn test_top_hit_returns_maximum() {
        let repo = InMemoryHitRepository::new();

        repo.record_hit(&fizzbuzz(10)).await.unwrap();
        for _ in 0..3 {
            repo.record_hit(&fizzbuzz(20)).await.unwrap();
        }
        repo.record_hit(&fizzbuzz(30)).await.unwrap();

        let top = repo.top_hit().await.unwrap();
        assert_eq!(top.input.limit, 20);
        assert_eq!(top.hits, 3);
    }

    #[tokio::test]
    async fn test_top_hit_tie_break_prefers_smallest_key() {
        let repo = InMemoryHitRepository::new();

        repo.record_hit(&FizzBuzzInput::new(3, 5, 100, "fizz", "buzz"))
            .await
            .unwrap();
        repo.record_hit(&FizzBuzzInput::new(2, 7, 100, "fizz", "buzz"))
            .await
            .unwrap();
        repo.record_hit(&FizzBuzzInput::new(2, 7, 100, "Fizz", "buzz"))
            .await
            .unwrap();

        let top = repo.top_hit().await.unwrap();
        assert_eq!(top.input, FizzBuzzInput::new(2, 7, 100, "Fizz", "buzz"));
        assert_eq!(top.hits, 1);
    }

    #[tokio::test]
    async fn test_concurrent_hits_are_not_lost() {
        let repo = Arc::new(InMemoryHitRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.record_hit(&fizzbuzz(100)).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.top_hit().await.unwrap().hits, 50);
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(InMemoryHitRepository::new().health_check().await);
    }
}
