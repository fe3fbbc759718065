//! The single-screen guessing game.
//!
//! - Secret drawn from `[min, max]` at round start
//! - Each valid guess costs an attempt and is recorded as too high, too low
//!   or correct
//! - The round ends on a correct guess or when attempts run out
//! - `restart` begins a fresh round at any time

mod engine;
mod view;

pub use engine::{GuessingGame, RoundStatus};
pub use view::GameView;
