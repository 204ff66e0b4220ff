//! Deterministic random number generation for tile draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical tile sequences
//! - **Serializable**: O(1) state capture and restore, so a saved game
//!   resumes with the exact refill values it would have drawn
//!
//! ```
//! use rust_match3::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_index(4), b.gen_index(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded ChaCha8 stream behind `PaletteGenerator`.
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

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Snapshot the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream from a snapshot taken with `state`.
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

/// Where a `GameRng` stream stands: its seed and the ChaCha8 word position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng, count: usize) -> Vec<usize> {
        (0..count).map(|_| rng.gen_index(6)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42), 64), draws(&mut GameRng::new(42), 64));
    }

    #[test]
    fn test_seeds_diverge() {
        assert_ne!(draws(&mut GameRng::new(1), 32), draws(&mut GameRng::new(2), 32));
    }

    #[test]
    fn test_gen_index_in_range() {
        let mut rng = GameRng::new(3);
        assert!(draws(&mut rng, 200).iter().all(|&i| i < 6));
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_resume_from_state() {
        let mut rng = GameRng::new(9);
        draws(&mut rng, 37);

        let saved = rng.state();
        let tail = draws(&mut rng, 16);

        let mut resumed = GameRng::from_state(&saved);
        assert_eq!(draws(&mut resumed, 16), tail);
        assert_eq!(resumed.seed(), 9);
    }

    #[test]
    fn test_state_json() {
        let mut rng = GameRng::new(5);
        draws(&mut rng, 3);
        let state = rng.state();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
