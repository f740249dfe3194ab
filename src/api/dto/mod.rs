//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization. Query parameters are received as raw
//! strings so that each numeric field reports its own parse error.

pub mod fizzbuzz;
pub mod health;
pub mod stats;
