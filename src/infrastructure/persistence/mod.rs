//! Hit repository implementations.
//!
//! # Repositories
//!
//! - [`PgHitRepository`] - PostgreSQL storage with an atomic upsert
//! - [`InMemoryHitRepository`] - Process-local storage, used when no database
//!   is configured and by HTTP tests

pub mod memory_hit_repository;
pub mod pg_hit_repository;

pub use memory_hit_repository::InMemoryHitRepository;
pub use pg_hit_repository::PgHitRepository;
