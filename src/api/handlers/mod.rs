//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod fallback;
pub mod fizzbuzz;
pub mod health;
pub mod stats;

pub use fallback::fallback_handler;
pub use fizzbuzz::fizzbuzz_handler;
pub use health::health_handler;
pub use stats::stats_handler;
