//! Round state.
//!
//! ## GameState
//!
//! Everything one round needs:
//! - The secret (fixed for the round)
//! - The raw input buffer
//! - The last feedback
//! - Attempt count and guess history
//! - Whether the round is over
//!
//! `GuessingGame` is the only owner; the state has no knowledge of the
//! rules beyond the bookkeeping below.

use smallvec::SmallVec;

use super::feedback::Feedback;
use super::guess::GuessRecord;

/// Inline capacity of the history. Matches the default attempt limit.
pub(crate) const HISTORY_INLINE: usize = 10;

/// Guesses of the current round, oldest first.
pub(crate) type History = SmallVec<[GuessRecord; HISTORY_INLINE]>;

/// Mutable record of a single round.
#[derive(Clone, Debug)]
pub struct GameState {
    secret: u32,

    /// Raw unparsed entry from the input field.
    pub current_input: String,

    /// Last feedback. `None` until the first submission.
    pub message: Option<Feedback>,

    attempts: u32,

    history: History,

    /// Set by a win or by running out of attempts.
    pub game_over: bool,
}

impl GameState {
    /// Fresh round state around the given secret.
    #[must_use]
    pub fn new(secret: u32) -> Self {
        Self {
            secret,
            current_input: String::new(),
            message: None,
            attempts: 0,
            history: History::new(),
            game_over: false,
        }
    }

    #[must_use]
    pub(crate) fn secret(&self) -> u32 {
        self.secret
    }

    /// Valid guesses made this round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Guesses made this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Count one attempt and append its record.
    pub fn record_guess(&mut self, record: GuessRecord) {
        self.attempts += 1;
        self.history.push(record);
    }
}
