//! Game configuration.
//!
//! `GameConfig` fixes the secret range and the attempt limit for every round
//! a `GuessingGame` plays. The defaults are the classic 1-100 range with ten
//! attempts; the player-facing binary never changes them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Smallest secret by default.
pub const DEFAULT_MIN: u32 = 1;

/// Largest secret by default.
pub const DEFAULT_MAX: u32 = 100;

/// Attempts per round by default.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest valid guess and secret (inclusive).
    pub min: u32,

    /// Largest valid guess and secret (inclusive).
    pub max: u32,

    /// Valid guesses allowed before the round is lost.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive secret range.
    #[must_use]
    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        assert!(min <= max, "Range must not be empty");
        self.min = min;
        self.max = max;
        self
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(max_attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = max_attempts;
        self
    }

    /// The inclusive range secrets are drawn from.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Check whether a parsed value is a legal guess.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}
