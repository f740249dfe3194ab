//! Domain layer containing business entities and logic.
//!
//! Nothing here depends on the HTTP or persistence layers.
//!
//! # Architecture
//!
//! - [`entities`] - Request parameters, validation, and hit records
//! - [`sequence`] - Pure FizzBuzz sequence generation
//! - [`repositories`] - Hit store trait definition
//!
//! # Request Flow
//!
//! 1. HTTP handler parses the query into an [`entities::FizzBuzzInput`]
//! 2. [`crate::application::services::FizzBuzzService`] validates it
//! 3. [`sequence::generate`] builds the result string
//! 4. The hit is recorded via [`repositories::HitRepository`]

pub mod entities;
pub mod repositories;
pub mod sequence;
