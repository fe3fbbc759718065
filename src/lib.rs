//! # guess-number
//!
//! A single-screen number guessing game with a deterministic core.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `GuessingGame` value owns the whole round. No
//!    globals, no interior mutability.
//!
//! 2. **Injectable Randomness**: Secrets come from a `SecretSource`. Seed a
//!    `GameRng` or script exact secrets with `ScriptedSecrets`.
//!
//! 3. **Categorical Feedback**: Messages are `Feedback` values. The display
//!    text is presentation only.
//!
//! ## Modules
//!
//! - `core`: Configuration, secret sources, guesses, feedback, round state
//! - `game`: `GuessingGame` and its `GameView` snapshot
//! - `error`: Input validation errors

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, ScriptedSecrets, SecretSource,
    Outcome, GuessRecord, Feedback,
};

pub use crate::error::GuessError;

pub use crate::game::{GuessingGame, GameView, RoundStatus};
