//! Business logic services for the application layer.

pub mod fizzbuzz_service;

pub use fizzbuzz_service::FizzBuzzService;
