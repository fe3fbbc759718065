//! Read-only snapshot for the presentation layer.

use serde::{Deserialize, Serialize};

use super::engine::RoundStatus;
use crate::core::{Feedback, GuessRecord};

/// Everything a front end needs to render one frame of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Feedback text, empty before the first submission.
    pub message: String,
    pub feedback: Option<Feedback>,
    pub remaining_attempts: u32,
    /// Guesses of the current round, oldest first.
    pub history: Vec<GuessRecord>,
    /// Show the guess input.
    pub input_allowed: bool,
    /// Show "play again".
    pub can_restart: bool,
    pub status: RoundStatus,
    pub current_input: String,
}
