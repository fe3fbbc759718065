//! Guesses, their outcomes, and input parsing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::error::GuessError;

/// Result of comparing a guess to the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Guess was above the secret.
    TooHigh,
    /// Guess was below the secret.
    TooLow,
    /// Guess matched the secret.
    Correct,
}

impl Outcome {
    /// Compare a guess against the secret.
    #[must_use]
    pub fn compare(guess: u32, secret: u32) -> Self {
        match guess.cmp(&secret) {
            Ordering::Less => Outcome::TooLow,
            Ordering::Greater => Outcome::TooHigh,
            Ordering::Equal => Outcome::Correct,
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::TooHigh => "too high",
            Outcome::TooLow => "too low",
            Outcome::Correct => "correct",
        };
        f.write_str(label)
    }
}

/// One valid guess in a round's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guessed number.
    pub number: u32,
    /// How it compared to the secret.
    pub outcome: Outcome,
}

impl GuessRecord {
    /// Record a guess against the secret.
    #[must_use]
    pub fn new(number: u32, secret: u32) -> Self {
        Self {
            number,
            outcome: Outcome::compare(number, secret),
        }
    }
}

/// Parse raw user text into a guess within the configured range.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// integer (decimals, trailing text, empty input) is rejected.
pub fn parse_guess(raw: &str, config: &GameConfig) -> Result<u32, GuessError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| GuessError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if !config.contains(value) {
        return Err(GuessError::OutOfRange {
            value,
            min: config.min,
            max: config.max,
        });
    }

    // In range, so it fits
    u32::try_from(value).map_err(|_| GuessError::OutOfRange {
        value,
        min: config.min,
        max: config.max,
    })
}
