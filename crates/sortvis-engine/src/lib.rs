//! Playback driver and controls for sortvis step animations.
//!
//! [`Visualizer`] owns the arrays, mode, lane selections, speed and run
//! state for one display surface, and plays step producers against it.
//! [`Playback`] is the lower-level lockstep driver it is built on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod controls;
pub mod metrics;
pub mod playback;
pub mod run_state;
pub mod visualizer;

pub use array::ArrayGenerator;
pub use config::{ConfigError, Delay, VisualizerConfig};
pub use controls::{Control, ControlHandle, Receipt};
pub use metrics::RunMetrics;
pub use playback::{Lane, Playback};
pub use run_state::RunState;
pub use visualizer::{RunReport, Visualizer, RECEIPT_LOG_CAPACITY};
