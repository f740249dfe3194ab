//! Repository trait for per-combination hit counting.

use crate::domain::entities::{FizzBuzzInput, FizzBuzzRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for counting requests per parameter combination.
///
/// The identity key is the full five-tuple `(int1, int2, limit, str1, str2)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHitRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryHitRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HitRepository: Send + Sync {
    /// Records one hit for the given combination.
    ///
    /// Inserts the key with `hits = 1` if absent, otherwise increments `hits`
    /// by one. The insert-or-increment is a single atomic operation of the
    /// backing store, so concurrent callers never lose an increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors. Nothing is retried.
    async fn record_hit(&self, input: &FizzBuzzInput) -> Result<(), AppError>;

    /// Returns the combination with the highest hit count.
    ///
    /// Ties are broken by the smallest key in ascending
    /// `(int1, int2, limit, str1, str2)` order, strings compared byte-wise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing has been recorded yet.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn top_hit(&self) -> Result<FizzBuzzRecord, AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
