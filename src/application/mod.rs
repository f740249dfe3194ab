//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::fizzbuzz_service::FizzBuzzService`] - Sequence generation and hit statistics

pub mod services;
