//! Errors for rejected guesses.
//!
//! These never escape `GuessingGame::submit_guess`; the game turns them into
//! `Feedback::InvalidInput`. They are public so other front ends can validate
//! input themselves through `parse_guess`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("{input:?} is not a whole number")]
    NotANumber { input: String },
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}
