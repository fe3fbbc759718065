//! Core types: configuration, secrets, guesses, feedback, round state.
//!
//! Nothing here knows the order of a submission; `game::GuessingGame`
//! drives these pieces.

pub mod config;
pub mod rng;
pub mod guess;
pub mod feedback;
pub(crate) mod state;

pub use config::GameConfig;
pub use rng::{GameRng, ScriptedSecrets, SecretSource};
pub use guess::{parse_guess, GuessRecord, Outcome};
pub use feedback::Feedback;
pub(crate) use state::GameState;
