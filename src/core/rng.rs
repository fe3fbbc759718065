//! Deterministic secret generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical sequence of secrets
//! - **Injectable**: `GuessingGame` draws through the `SecretSource` trait,
//!   so tests can script exact secrets
//!
//! ```
//! use guess_number::core::{GameRng, SecretSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same secrets
//! assert_eq!(rng1.draw(1..=100), rng2.draw(1..=100));
//! ```

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of round secrets.
///
/// `draw` must return a value inside `range`. It is called once per round.
pub trait SecretSource {
    /// Draw the secret for a new round.
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Seeded RNG used for secrets in normal play.
///
/// Uses ChaCha8 so a seed reproduces a whole session of rounds.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a uniformly distributed integer in the inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl SecretSource for GameRng {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range_inclusive(range)
    }
}

/// Replays a fixed list of secrets, cycling when exhausted.
///
/// Values outside the requested range are clamped into it.
#[derive(Clone, Debug)]
pub struct ScriptedSecrets {
    queue: VecDeque<u32>,
}

impl ScriptedSecrets {
    /// Create a script. Panics if `secrets` is empty.
    pub fn new(secrets: impl IntoIterator<Item = u32>) -> Self {
        let queue: VecDeque<u32> = secrets.into_iter().collect();
        assert!(!queue.is_empty(), "Scripted secrets must not be empty");
        Self { queue }
    }

    /// A script that always yields the same secret.
    pub fn fixed(secret: u32) -> Self {
        Self::new([secret])
    }
}

impl SecretSource for ScriptedSecrets {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        // Non-empty by construction
        let next = self.queue.pop_front().unwrap_or(*range.start());
        self.queue.push_back(next);
        next.clamp(*range.start(), *range.end())
    }
}
