//! Core domain entities.
//!
//! - [`FizzBuzzInput`] - The five request parameters, also the hit-count key
//! - [`FizzBuzzRecord`] - A parameter combination with its hit count
//! - [`ValidationError`] - Invariant violations reported by [`FizzBuzzInput::validate`]

pub mod fizzbuzz;

pub use fizzbuzz::{FizzBuzzInput, FizzBuzzRecord, ValidationError};
