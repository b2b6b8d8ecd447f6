//! Seeded random array generation for resets.
//!
//! Uses a ChaCha8 RNG seeded from [`VisualizerConfig::seed`], so the same
//! seed always reproduces the same sequence of arrays across resets.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::VisualizerConfig;

/// Draws fixed-length arrays of uniformly distributed values.
#[derive(Clone, Debug)]
pub struct ArrayGenerator {
    rng: ChaCha8Rng,
    len: usize,
    range: RangeInclusive<u32>,
}

impl ArrayGenerator {
    /// Create a generator for `len` values drawn from `range`.
    ///
    /// `range` must be non-empty; [`VisualizerConfig::validate`] checks
    /// this before a generator is built from a config.
    pub fn new(seed: u64, len: usize, range: RangeInclusive<u32>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            len,
            range,
        }
    }

    /// Generator matching a (validated) config.
    pub fn from_config(config: &VisualizerConfig) -> Self {
        Self::new(
            config.seed,
            config.array_len,
            config.value_min..=config.value_max,
        )
    }

    /// Draw the next array.
    pub fn generate(&mut self) -> Vec<u32> {
        let range = self.range.clone();
        (0..self.len)
            .map(|_| self.rng.random_range(range.clone()))
            .collect()
    }

    /// Length of every generated array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether generated arrays are empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
