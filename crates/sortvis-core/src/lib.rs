//! Core types and traits for the sortvis step animator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the sortvis workspace:
//! snapshots, algorithm and lane identifiers, error types, and the
//! display and suspension traits the playback driver is written against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod snapshot;
pub mod traits;

pub use error::{ControlError, ParseAlgorithmError};
pub use id::{AlgorithmId, LaneId, Layout, RunId, RunMode};
pub use snapshot::Snapshot;
pub use traits::{DisplaySurface, Sleeper, ThreadSleeper};
