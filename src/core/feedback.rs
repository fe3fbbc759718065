//! Feedback shown to the player after each submission.
//!
//! The variant is the contract; the `Display` text is presentation and may
//! change freely.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::guess::Outcome;

/// Last message of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// Input was not a number in range.
    InvalidInput { min: u32, max: u32 },
    /// Guess was below the secret.
    GuessHigher { guess: u32 },
    /// Guess was above the secret.
    GuessLower { guess: u32 },
    /// Guess matched the secret.
    Correct,
    /// Attempts ran out. Reveals the secret.
    GameOver { secret: u32 },
}

impl Feedback {
    /// Feedback for a valid guess with the given outcome.
    #[must_use]
    pub fn for_outcome(guess: u32, outcome: Outcome) -> Self {
        match outcome {
            Outcome::TooLow => Feedback::GuessHigher { guess },
            Outcome::TooHigh => Feedback::GuessLower { guess },
            Outcome::Correct => Feedback::Correct,
        }
    }

    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Feedback::InvalidInput { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::InvalidInput { min, max } => {
                write!(f, "Please enter a number between {} and {}.", min, max)
            }
            Feedback::GuessHigher { guess } => write!(f, "Higher than {}!", guess),
            Feedback::GuessLower { guess } => write!(f, "Lower than {}!", guess),
            Feedback::Correct => write!(f, "Correct!"),
            Feedback::GameOver { secret } => write!(f, "Game over! The number was {}.", secret),
        }
    }
}
