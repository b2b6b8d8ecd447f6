//! Lazy snapshot producers for the supported sorting algorithms.
//!
//! Each producer owns a private working copy of the array and yields a
//! [`Snapshot`](sortvis_core::Snapshot) after every unit of progress
//! (comparison, swap, shift or placement). Producers are explicit
//! iterator state machines: finite, deterministic for a given input,
//! and not restartable. A new run builds a new producer.
//!
//! # Emission granularity
//!
//! | Algorithm | Snapshot after |
//! |-----------|----------------|
//! | [`BubbleSteps`] | every adjacent comparison, swapped or not |
//! | [`InsertionSteps`] | every shift, plus one placement per outer index |
//! | [`SelectionSteps`] | every minimum-scan comparison, plus one per actual swap |
//!
//! Arrays of length 0 or 1 yield nothing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bubble;
pub mod count;
pub mod insertion;
pub mod producer;
pub mod selection;

pub use bubble::BubbleSteps;
pub use count::expected_step_count;
pub use insertion::InsertionSteps;
pub use producer::{steps, StepProducer};
pub use selection::SelectionSteps;
