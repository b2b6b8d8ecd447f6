//! Benchmark profiles and utilities for sortvis.
//!
//! - [`reference_array`]: the 20-element array a default visualizer
//!   starts with for a given seed
//! - [`stress_array`]: a 1000-element array for producer throughput
//! - [`NullSurface`] / [`NoWait`]: display and sleeper that do nothing, so
//!   playback cost is measured without rendering or delays

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use sortvis_core::{DisplaySurface, LaneId, Sleeper, Snapshot};
use sortvis_engine::{ArrayGenerator, VisualizerConfig};

/// Reference-scenario array: default length and value range.
pub fn reference_array(seed: u64) -> Vec<u32> {
    ArrayGenerator::from_config(&VisualizerConfig {
        seed,
        ..Default::default()
    })
    .generate()
}

/// Large array for producer throughput.
pub fn stress_array(seed: u64) -> Vec<u32> {
    ArrayGenerator::new(seed, 1000, 5..=104).generate()
}

/// Surface that discards every publication but counts them.
#[derive(Debug, Default)]
pub struct NullSurface {
    /// Publications received.
    pub published: u64,
}

impl DisplaySurface for NullSurface {
    fn publish(&mut self, _lane: LaneId, snapshot: &Snapshot) {
        std::hint::black_box(snapshot);
        self.published += 1;
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWait;

impl Sleeper for NoWait {
    fn sleep(&mut self, _delay: Duration) {}
}
