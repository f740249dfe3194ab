//! Generalized FizzBuzz sequence generation.
//!
//! For every `i` in `1..=limit` the token is chosen by independent
//! divisibility checks against `int1` and `int2`, so divisors sharing a
//! common factor (e.g. `2` and `10`) and negative divisors are handled
//! without computing `int1 * int2`.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::FizzBuzzInput;

/// Token separator in the joined output.
pub const DELIMITER: char = ',';

/// Upper bound for the up-front output allocation.
const MAX_PREALLOCATED_TOKENS: usize = 1 << 20;

/// Tokens emitted between two checks of the cancellation flag.
pub const CANCEL_CHECK_INTERVAL: usize = 1 << 16;

/// Which substitution applies at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Both,
    First,
    Second,
    Number(i64),
}

fn classify(input: &FizzBuzzInput, i: i64) -> Token {
    // `i >= 1`, so `%` cannot overflow even for `i64::MIN` divisors.
    let by_first = i % input.int1 == 0;
    let by_second = i % input.int2 == 0;

    match (by_first, by_second) {
        (true, true) => Token::Both,
        (true, false) => Token::First,
        (false, true) => Token::Second,
        (false, false) => Token::Number(i),
    }
}

/// Yields the `limit` tokens of the sequence, in order.
///
/// Expects an input that passed [`FizzBuzzInput::validate`]; a zero divisor
/// panics on the modulo.
pub fn tokens(input: &FizzBuzzInput) -> impl Iterator<Item = Cow<'_, str>> {
    (1..=input.limit).map(move |i| match classify(input, i) {
        Token::Both => Cow::Owned(format!("{}{}", input.str1, input.str2)),
        Token::First => Cow::Borrowed(input.str1.as_str()),
        Token::Second => Cow::Borrowed(input.str2.as_str()),
        Token::Number(n) => Cow::Owned(n.to_string()),
    })
}

/// Builds the comma-joined sequence for a validated input.
///
/// Runs in linear time and writes straight into a single buffer; there is no
/// trailing delimiter.
///
/// # Examples
///
/// ```
/// use fizzbuzz_api::domain::entities::FizzBuzzInput;
/// use fizzbuzz_api::domain::sequence::generate;
///
/// let input = FizzBuzzInput::new(3, 5, 15, "fizz", "buzz");
/// assert_eq!(
///     generate(&input),
///     "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz"
/// );
/// ```
pub fn generate(input: &FizzBuzzInput) -> String {
    generate_until_cancelled(input, &AtomicBool::new(false)).unwrap_or_default()
}

/// Same as [`generate`], but gives up once `cancelled` is set.
///
/// The flag is polled every [`CANCEL_CHECK_INTERVAL`] tokens. Returns `None`
/// if generation was abandoned.
pub fn generate_until_cancelled(input: &FizzBuzzInput, cancelled: &AtomicBool) -> Option<String> {
    let expected_tokens = usize::try_from(input.limit)
        .unwrap_or(0)
        .min(MAX_PREALLOCATED_TOKENS);
    let token_width = (input.str1.len() + input.str2.len()).max(8);
    let mut out = String::with_capacity(expected_tokens * (token_width + 1));

    for (idx, token) in tokens(input).enumerate() {
        if idx > 0 {
            if idx % CANCEL_CHECK_INTERVAL == 0 && cancelled.load(Ordering::Relaxed) {
                return None;
            }
            out.push(DELIMITER);
        }
        out.push_str(&token);
    }

    Some(out)
}
