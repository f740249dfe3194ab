//! FizzBuzz generation and hit statistics service.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use metrics::counter;

use crate::domain::entities::{FizzBuzzInput, FizzBuzzRecord};
use crate::domain::repositories::HitRepository;
use crate::domain::sequence;
use crate::error::AppError;

/// Orchestrates validation, generation, and hit recording.
///
/// The repository is injected at construction time; use
/// `FizzBuzzService<dyn HitRepository>` when the backend is chosen at runtime.
pub struct FizzBuzzService<R: HitRepository + ?Sized> {
    repository: Arc<R>,
}

/// Raises the flag when dropped, so a dropped request stops its generation task.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Collapses any store failure into an internal error.
fn into_internal(err: AppError) -> AppError {
    match err {
        AppError::Internal { .. } => err,
        other => AppError::internal(other.to_string()),
    }
}

impl<R: HitRepository + ?Sized> FizzBuzzService<R> {
    /// Creates a new FizzBuzz service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the input, generates the sequence, and records one hit.
    ///
    /// Invalid input is rejected before the store is touched. The request
    /// only succeeds if the hit was recorded; on a store failure the
    /// generated sequence is discarded.
    ///
    /// Generation runs on the blocking pool. If this future is dropped (for
    /// instance by the request timeout) the generation task stops and no hit
    /// is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input violates an invariant.
    /// Returns [`AppError::Internal`] if the hit could not be recorded.
    pub async fn generate_and_record(&self, input: &FizzBuzzInput) -> Result<String, AppError> {
        if let Err(e) = input.validate() {
            counter!("fizzbuzz_generate_total", "outcome" => "invalid_input").increment(1);
            return Err(e.into());
        }

        let result = generate_blocking(input).await?;

        if let Err(e) = self.repository.record_hit(input).await {
            tracing::error!(error = %e, ?input, "Failed to record FizzBuzz request");
            counter!("fizzbuzz_generate_total", "outcome" => "internal_error").increment(1);
            return Err(into_internal(e));
        }

        counter!("fizzbuzz_generate_total", "outcome" => "ok").increment(1);
        Ok(result)
    }

    /// Returns the most requested parameter combination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if nothing was recorded yet or the
    /// store fails.
    pub async fn stats(&self) -> Result<FizzBuzzRecord, AppError> {
        match self.repository.top_hit().await {
            Ok(record) => {
                counter!("fizzbuzz_stats_total", "outcome" => "ok").increment(1);
                Ok(record)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to get most requested FizzBuzz");
                counter!("fizzbuzz_stats_total", "outcome" => "internal_error").increment(1);
                Err(into_internal(e))
            }
        }
    }

    /// Reports whether the hit store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

/// Runs the sequence generation off the async workers.
async fn generate_blocking(input: &FizzBuzzInput) -> Result<String, AppError> {
    let cancelled = Arc::new(AtomicBool::new(false));
    let _guard = CancelOnDrop(cancelled.clone());
    let task_input = input.clone();

    tokio::task::spawn_blocking(move || {
        sequence::generate_until_cancelled(&task_input, &cancelled)
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "FizzBuzz generation task failed");
        counter!("fizzbuzz_generate_total", "outcome" => "internal_error").increment(1);
        AppError::internal("Failed to generate sequence")
    })?
    .ok_or_else(|| AppError::internal("Sequence generation cancelled"))
}
