//! Deterministic randomness for card effects.
//!
//! Cards never reach for a global RNG. Every roll (critical hits, damage
//! variation) is drawn from a `RandomSource` handed in by the caller, so
//! a play can be replayed exactly.
//!
//! ## Sources
//!
//! - `GameRng`: seeded ChaCha8 stream, serializable in O(1)
//! - `ScriptedRandom`: replays a fixed list of rolls
//!
//! ```
//! use spell_cards::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.next_f64(), rng2.next_f64());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A source of uniform rolls in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Roll against a probability. `true` when the roll lands below it.
    fn roll(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// Deterministic RNG backed by ChaCha8.
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

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// e.g. one stream per card so adding a card doesn't shift another's rolls.
    /// The context seed comes from `FxHasher`, which does not vary between
    /// toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always rolls `0.5`,
/// which is the neutral point for damage variation.
///
/// ```
/// use spell_cards::core::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([0.9, 0.5]);
/// assert_eq!(rng.next_f64(), 0.9);
/// assert_eq!(rng.next_f64(), 0.5);
/// assert_eq!(rng.next_f64(), 0.9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Largest value a roll may take.
    const MAX_ROLL: f64 = 1.0 - f64::EPSILON;

    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, Self::MAX_ROLL))
                .collect(),
            cursor: 0,
        }
    }

    /// Number of rolls consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
