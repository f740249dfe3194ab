//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::FizzBuzzService;
use crate::domain::repositories::HitRepository;

#[derive(Clone)]
pub struct AppState {
    pub fizzbuzz_service: Arc<FizzBuzzService<dyn HitRepository>>,
}

impl AppState {
    /// Builds the state around an explicitly constructed hit store.
    pub fn new(repository: Arc<dyn HitRepository>) -> Self {
        Self {
            fizzbuzz_service: Arc::new(FizzBuzzService::new(repository)),
        }
    }
}
