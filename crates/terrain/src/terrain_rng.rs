//! Deterministic terrain RNG.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. The
//! generator is passed explicitly to `diamond_square::generate` so identical
//! seeds produce identical height grids, with no ambient RNG state.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DEFAULT_SEED;

/// Seeded random stream used for midpoint displacement.
#[derive(Debug, Clone)]
pub struct TerrainRng(pub ChaCha8Rng);

impl Default for TerrainRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl TerrainRng {
    /// Create a new `TerrainRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform sample in `[-1, 1]`.
    #[inline]
    pub fn signed_unit(&mut self) -> f32 {
        self.0.gen_range(-1.0..=1.0)
    }
}
