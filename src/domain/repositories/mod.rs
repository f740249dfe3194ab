//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`HitRepository`] - Per-combination hit counting
//!
//! # Testing
//!
//! See integration tests in `tests/repository_hits.rs` for usage examples.

pub mod hit_repository;

pub use hit_repository::HitRepository;

#[cfg(test)]
pub use hit_repository::MockHitRepository;
