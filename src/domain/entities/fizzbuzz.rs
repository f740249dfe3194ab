//! FizzBuzz request parameters and their hit-count record.

use thiserror::Error;

/// The five parameters of a generalized FizzBuzz request.
///
/// Fully determines both the generated sequence and the identity key under
/// which hits are counted. Field order matters: the derived [`Ord`] compares
/// `int1`, `int2`, `limit`, `str1`, `str2` in that order (strings byte-wise),
/// which is the tie-break order used by [`crate::domain::repositories::HitRepository::top_hit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FizzBuzzInput {
    pub int1: i64,
    pub int2: i64,
    pub limit: i64,
    pub str1: String,
    pub str2: String,
}

/// Reasons a well-typed [`FizzBuzzInput`] is rejected.
///
/// One variant per invariant, reported in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("int1 must be different than 0")]
    Int1Zero,
    #[error("int2 must be different than 0")]
    Int2Zero,
    #[error("limit must be greater than 0")]
    LimitNotPositive,
    #[error("str1 must not be empty")]
    Str1Empty,
    #[error("str2 must not be empty")]
    Str2Empty,
    #[error("int1 and int2 must be different")]
    SameDivisors,
}

impl FizzBuzzInput {
    pub fn new(
        int1: i64,
        int2: i64,
        limit: i64,
        str1: impl Into<String>,
        str2: impl Into<String>,
    ) -> Self {
        Self {
            int1,
            int2,
            limit,
            str1: str1.into(),
            str2: str2.into(),
        }
    }

    /// Checks the input invariants.
    ///
    /// The first violated invariant wins, in this order: `int1 != 0`,
    /// `int2 != 0`, `limit > 0`, `str1` non-empty, `str2` non-empty,
    /// `int1 != int2`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failed check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.int1 == 0 {
            return Err(ValidationError::Int1Zero);
        }

        if self.int2 == 0 {
            return Err(ValidationError::Int2Zero);
        }

        if self.limit <= 0 {
            return Err(ValidationError::LimitNotPositive);
        }

        if self.str1.is_empty() {
            return Err(ValidationError::Str1Empty);
        }

        if self.str2.is_empty() {
            return Err(ValidationError::Str2Empty);
        }

        if self.int1 == self.int2 {
            return Err(ValidationError::SameDivisors);
        }

        Ok(())
    }
}

/// A parameter combination together with how many times it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FizzBuzzRecord {
    pub input: FizzBuzzInput,
    pub hits: i64,
}

impl FizzBuzzRecord {
    pub fn new(input: FizzBuzzInput, hits: i64) -> Self {
        Self { input, hits }
    }
}
