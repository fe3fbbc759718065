//! The guessing game itself.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::view::GameView;
use crate::core::{
    parse_guess, Feedback, GameConfig, GameRng, GameState, GuessRecord, SecretSource,
};

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Still accepting guesses.
    InProgress,
    /// The secret was guessed.
    Won,
    /// Attempts ran out without a correct guess.
    Lost,
}

/// A number guessing game.
///
/// Owns the round state and the source of secrets. Every operation runs to
/// completion; the presentation layer reads the derived values afterwards.
///
/// ```
/// use guess_number::core::ScriptedSecrets;
/// use guess_number::{GameConfig, GuessingGame, RoundStatus};
///
/// let mut game = GuessingGame::new(GameConfig::default(), ScriptedSecrets::fixed(42));
/// game.submit_guess("50");
/// game.submit_guess("42");
///
/// assert_eq!(game.status(), RoundStatus::Won);
/// assert_eq!(game.attempts(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GuessingGame<S: SecretSource = GameRng> {
    config: GameConfig,
    source: S,
    state: GameState,
}

impl GuessingGame<GameRng> {
    /// Default rules with a seeded RNG.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), GameRng::new(seed))
    }

    /// Default rules with an OS-seeded RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameConfig::default(), GameRng::from_entropy())
    }

    /// Seed of the RNG, so a session can be replayed with `with_seed`.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: SecretSource> GuessingGame<S> {
    /// Create a game and start its first round.
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let state = GameState::new(source.draw(config.range()));
        info!(
            "round started: {}..={} with {} attempts",
            config.min, config.max, config.max_attempts
        );

        Self { config, source, state }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Operations ===

    /// Submit a guess as typed by the player.
    ///
    /// Invalid text only updates the message. Once the round has ended every
    /// submission is ignored, invalid text included, and the message is left
    /// as it was.
    pub fn submit_guess(&mut self, raw: &str) {
        if !self.is_input_allowed() {
            debug!("guess ignored, round is over");
            return;
        }

        let guess = match parse_guess(raw, &self.config) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("guess rejected: {}", err);
                self.state.message = Some(Feedback::InvalidInput {
                    min: self.config.min,
                    max: self.config.max,
                });
                return;
            }
        };

        let record = GuessRecord::new(guess, self.state.secret());
        self.state.record_guess(record);
        self.state.message = Some(Feedback::for_outcome(guess, record.outcome));
        debug!(
            "attempt {}/{}: {} is {}",
            self.state.attempts(),
            self.config.max_attempts,
            guess,
            record.outcome
        );

        if record.outcome.is_correct() {
            self.state.game_over = true;
            info!("round won after {} attempts", self.state.attempts());
        }

        // A correct final guess keeps its win message
        if !self.state.game_over && self.state.attempts() >= self.config.max_attempts {
            self.state.message = Some(Feedback::GameOver {
                secret: self.state.secret(),
            });
            self.state.game_over = true;
            info!("round lost after {} attempts", self.state.attempts());
        }

        self.state.current_input.clear();
    }

    /// Replace the input buffer with what the player has typed so far.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.current_input = text.into();
    }

    /// Submit whatever is in the input buffer.
    ///
    /// Rejected text stays in the buffer so the player can correct it.
    pub fn submit_input(&mut self) {
        let raw = self.state.current_input.clone();
        self.submit_guess(&raw);
    }

    /// Start a new round with a fresh secret.
    pub fn restart(&mut self) {
        self.state = GameState::new(self.source.draw(self.config.range()));
        info!("round restarted");
    }

    // === Derived values ===

    /// Valid guesses made this round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.state.attempts()
    }

    /// Attempts left before the round is lost.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.config.max_attempts.saturating_sub(self.state.attempts())
    }

    /// Whether the presentation layer should offer the guess input.
    #[must_use]
    pub fn is_input_allowed(&self) -> bool {
        !self.state.game_over && self.state.attempts() < self.config.max_attempts
    }

    /// Whether the presentation layer should offer "play again".
    #[must_use]
    pub fn can_restart(&self) -> bool {
        self.state.game_over || self.state.attempts() == self.config.max_attempts
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Guesses made this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        self.state.history()
    }

    /// Last feedback, if any submission has happened this round.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.state.message
    }

    /// Last feedback as display text. Empty at round start.
    #[must_use]
    pub fn message(&self) -> String {
        self.state
            .message
            .map(|feedback| feedback.to_string())
            .unwrap_or_default()
    }

    /// Current input buffer.
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.state.current_input
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if !self.state.game_over {
            return RoundStatus::InProgress;
        }

        match self.state.history().last() {
            Some(record) if record.outcome.is_correct() => RoundStatus::Won,
            _ => RoundStatus::Lost,
        }
    }

    /// Snapshot of everything the presentation layer renders.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            message: self.message(),
            feedback: self.feedback(),
            remaining_attempts: self.remaining_attempts(),
            history: self.history().to_vec(),
            input_allowed: self.is_input_allowed(),
            can_restart: self.can_restart(),
            status: self.status(),
            current_input: self.state.current_input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, ScriptedSecrets};

    fn game_with_secret(secret: u32) -> GuessingGame<ScriptedSecrets> {
        GuessingGame::new(GameConfig::default(), ScriptedSecrets::fixed(secret))
    }

    #[test]
    fn test_initial_state() {
        let game = game_with_secret(42);

        assert_eq!(game.attempts(), 0);
        assert_eq!(game.remaining_attempts(), 10);
        assert!(game.history().is_empty());
        assert!(game.message().is_empty());
        assert!(game.is_input_allowed());
        assert!(!game.can_restart());
        assert_eq!(game.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_too_high_then_too_low_then_correct() {
        let mut game = game_with_secret(42);

        game.submit_guess("50");
        assert_eq!(game.feedback(), Some(Feedback::GuessLower { guess: 50 }));
        assert_eq!(game.attempts(), 1);

        game.submit_guess("10");
        assert_eq!(game.feedback(), Some(Feedback::GuessHigher { guess: 10 }));
        assert_eq!(game.attempts(), 2);

        game.submit_guess("42");
        assert_eq!(game.feedback(), Some(Feedback::Correct));
        assert_eq!(game.attempts(), 3);
        assert!(game.is_over());
        assert_eq!(game.status(), RoundStatus::Won);

        let outcomes: Vec<_> = game.history().iter().map(|r| (r.number, r.outcome)).collect();
        assert_eq!(
            outcomes,
            vec![(50, Outcome::TooHigh), (10, Outcome::TooLow), (42, Outcome::Correct)]
        );
    }

    #[test]
    fn test_invalid_input_changes_only_message() {
        let mut game = game_with_secret(7);

        game.submit_guess("abc");

        assert!(game.feedback().is_some_and(|f| f.is_invalid_input()));
        assert_eq!(game.attempts(), 0);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = game_with_secret(7);

        game.submit_guess("0");
        game.submit_guess("101");

        assert!(game.feedback().is_some_and(|f| f.is_invalid_input()));
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_loses_after_max_attempts() {
        let mut game = game_with_secret(3);

        for guess in 11..=20 {
            game.submit_guess(&guess.to_string());
        }

        assert!(game.is_over());
        assert_eq!(game.status(), RoundStatus::Lost);
        assert_eq!(game.feedback(), Some(Feedback::GameOver { secret: 3 }));
        assert!(game.message().contains('3'));
        assert_eq!(game.remaining_attempts(), 0);
        assert!(!game.is_input_allowed());
        assert!(game.can_restart());
    }

    #[test]
    fn test_correct_final_guess_wins() {
        let mut game = game_with_secret(3);

        for guess in 11..=19 {
            game.submit_guess(&guess.to_string());
        }
        game.submit_guess("3");

        assert_eq!(game.attempts(), 10);
        assert_eq!(game.status(), RoundStatus::Won);
        assert_eq!(game.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn test_guess_after_game_over_ignored() {
        let mut game = game_with_secret(42);
        game.submit_guess("42");

        game.submit_guess("10");
        game.submit_guess("abc");

        assert_eq!(game.attempts(), 1);
        assert_eq!(game.feedback(), Some(Feedback::Correct));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = GuessingGame::new(GameConfig::default(), ScriptedSecrets::new([42, 8]));
        game.submit_guess("42");
        game.set_input("13");

        game.restart();

        assert_eq!(game.attempts(), 0);
        assert!(game.history().is_empty());
        assert!(game.message().is_empty());
        assert!(game.current_input().is_empty());
        assert!(!game.is_over());

        // Second scripted secret is now in play
        game.submit_guess("8");
        assert_eq!(game.status(), RoundStatus::Won);
    }

    #[test]
    fn test_restart_mid_round() {
        let mut game = game_with_secret(42);
        game.submit_guess("1");
        game.submit_guess("2");

        game.restart();

        assert_eq!(game.attempts(), 0);
        assert_eq!(game.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_submit_input_clears_buffer() {
        let mut game = game_with_secret(42);

        game.set_input("50");
        game.submit_input();

        assert!(game.current_input().is_empty());
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_submit_input_keeps_rejected_text() {
        let mut game = game_with_secret(42);

        game.set_input("fifty");
        game.submit_input();

        assert_eq!(game.current_input(), "fifty");
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_view_snapshot() {
        let mut game = game_with_secret(42);
        game.submit_guess("50");

        let view = game.view();

        assert_eq!(view.remaining_attempts, 9);
        assert_eq!(view.history.len(), 1);
        assert!(view.input_allowed);
        assert!(!view.can_restart);
        assert_eq!(view.status, RoundStatus::InProgress);
        assert_eq!(view.message, game.message());
    }

    #[test]
    fn test_invalid_after_game_over_keeps_message() {
        let mut game = game_with_secret(3);
        for guess in 11..=20 {
            game.submit_guess(&guess.to_string());
        }

        game.submit_guess("abc");

        assert_eq!(game.feedback(), Some(Feedback::GameOver { secret: 3 }));
        assert_eq!(game.attempts(), 10);
    }

    #[test]
    fn test_seed_replays_session() {
        let mut original = GuessingGame::from_entropy();
        let mut replay = GuessingGame::with_seed(original.seed());

        for guess in ["50", "25", "75"] {
            original.submit_guess(guess);
            replay.submit_guess(guess);
        }

        assert_eq!(original.history(), replay.history());
        assert_eq!(replay.seed(), original.seed());
    }

    #[test]
    fn test_seeded_games_agree() {
        let mut game1 = GuessingGame::with_seed(42);
        let mut game2 = GuessingGame::with_seed(42);

        for guess in ["50", "25", "75", "12", "88"] {
            game1.submit_guess(guess);
            game2.submit_guess(guess);
        }

        assert_eq!(game1.history(), game2.history());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new().with_range(1, 3).with_max_attempts(2);
        let mut game = GuessingGame::new(config, ScriptedSecrets::fixed(3));

        game.submit_guess("4");
        assert!(game.feedback().is_some_and(|f| f.is_invalid_input()));

        game.submit_guess("1");
        game.submit_guess("2");
        assert_eq!(game.status(), RoundStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
    }
}
