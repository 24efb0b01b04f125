//! Seeded RNG for deck shuffling.
//!
//! A game owns one `GameRng`. It is only consulted when the deck moves to
//! the draw pile under `ShuffleMode::Seeded`, so the same seed always gives
//! the same draw order.
//!
//! ```
//! use conduit_ccg::core::GameRng;
//!
//! let mut left: Vec<u32> = (0..10).collect();
//! let mut right = left.clone();
//! GameRng::new(42).shuffle(&mut left);
//! GameRng::new(42).shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a stream keyed by `context` from this seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = rustc_hash::FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Permute `cards` in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        use rand::seq::SliceRandom;
        cards.shuffle(&mut self.inner);
    }
}
