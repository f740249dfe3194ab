//! HTTP middleware for request processing.
//!
//! Provides observability and request timeouts.

pub mod timeout;
pub mod tracing;
