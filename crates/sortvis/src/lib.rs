//! sortvis: step-by-step animation of classic comparison sorts.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sortvis sub-crates and adds a plain-text bar renderer. For most
//! users, adding `sortvis` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sortvis::prelude::*;
//! use std::time::Duration;
//!
//! struct NoWait;
//! impl Sleeper for NoWait {
//!     fn sleep(&mut self, _delay: Duration) {}
//! }
//!
//! let config = VisualizerConfig { compare_mode: true, seed: 7, ..Default::default() };
//! let mut vis = Visualizer::new(config, BarChart::default(), NoWait).unwrap();
//! vis.select_lane(LaneId::B, AlgorithmId::Selection);
//! let report = vis.run_comparison().unwrap();
//! assert_eq!(report.metrics.steps(LaneId::A), 190);
//! assert!(vis.display().render().contains("Selection Sort"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sortvis-core` | `Snapshot`, ids, errors, display and sleeper traits |
//! | [`steps`] | `sortvis-steps` | Step producers per algorithm |
//! | [`engine`] | `sortvis-engine` | `Visualizer`, `Playback`, config, controls |
//! | [`render`] | this crate | `BarChart` text renderer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod render;

/// Core types, traits, and IDs (`sortvis-core`).
pub use sortvis_core as types;

/// Step producers (`sortvis-steps`).
///
/// [`steps::StepProducer`] dispatches to [`steps::BubbleSteps`],
/// [`steps::InsertionSteps`] and [`steps::SelectionSteps`].
pub use sortvis_steps as steps;

/// Playback driver and controls (`sortvis-engine`).
pub use sortvis_engine as engine;

pub use render::BarChart;

/// Common imports for typical sortvis usage.
///
/// ```rust
/// use sortvis::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sortvis_core::{
        AlgorithmId, ControlError, DisplaySurface, LaneId, Layout, RunId, RunMode, Sleeper,
        Snapshot, ThreadSleeper,
    };

    // Producers
    pub use sortvis_steps::{expected_step_count, steps, StepProducer};

    // Engine
    pub use sortvis_engine::{
        Control, ControlHandle, Delay, Playback, Receipt, RunMetrics, RunReport, RunState,
        Visualizer, VisualizerConfig,
    };

    // Rendering
    pub use crate::render::BarChart;
}
