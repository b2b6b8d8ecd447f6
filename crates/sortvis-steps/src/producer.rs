//! Algorithm dispatch: one producer type for any [`AlgorithmId`].

use std::iter::FusedIterator;

use sortvis_core::{AlgorithmId, Snapshot};

use crate::bubble::BubbleSteps;
use crate::insertion::InsertionSteps;
use crate::selection::SelectionSteps;

/// A step producer for any supported algorithm.
///
/// Built fresh per run from a private copy of the array and dropped once
/// exhausted. The playback driver only ever sees this type.
///
/// # Examples
///
/// ```
/// use sortvis_core::AlgorithmId;
/// use sortvis_steps::StepProducer;
///
/// let mut steps = StepProducer::new(AlgorithmId::Bubble, vec![9, 1, 8, 2, 7]);
/// let last = steps.by_ref().last().unwrap();
/// assert_eq!(last, [1, 2, 7, 8, 9]);
/// assert_eq!(steps.emitted(), 10);
/// ```
#[derive(Clone, Debug)]
pub enum StepProducer {
    /// See [`BubbleSteps`].
    Bubble(BubbleSteps),
    /// See [`InsertionSteps`].
    Insertion(InsertionSteps),
    /// See [`SelectionSteps`].
    Selection(SelectionSteps),
}

impl StepProducer {
    /// Build the producer for `algorithm`, taking ownership of `array`.
    pub fn new(algorithm: AlgorithmId, array: Vec<u32>) -> Self {
        match algorithm {
            AlgorithmId::Bubble => Self::Bubble(BubbleSteps::new(array)),
            AlgorithmId::Insertion => Self::Insertion(InsertionSteps::new(array)),
            AlgorithmId::Selection => Self::Selection(SelectionSteps::new(array)),
        }
    }

    /// Which algorithm this producer runs.
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::Bubble(_) => AlgorithmId::Bubble,
            Self::Insertion(_) => AlgorithmId::Insertion,
            Self::Selection(_) => AlgorithmId::Selection,
        }
    }

    /// Snapshots produced so far.
    pub fn emitted(&self) -> u64 {
        match self {
            Self::Bubble(s) => s.emitted(),
            Self::Insertion(s) => s.emitted(),
            Self::Selection(s) => s.emitted(),
        }
    }

    /// Current contents of the private working array.
    pub fn working(&self) -> &[u32] {
        match self {
            Self::Bubble(s) => s.working(),
            Self::Insertion(s) => s.working(),
            Self::Selection(s) => s.working(),
        }
    }
}

impl Iterator for StepProducer {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match self {
            Self::Bubble(s) => s.next(),
            Self::Insertion(s) => s.next(),
            Self::Selection(s) => s.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Bubble(s) => s.size_hint(),
            Self::Insertion(s) => s.size_hint(),
            Self::Selection(s) => s.size_hint(),
        }
    }
}

impl FusedIterator for StepProducer {}

/// Build a producer over a private copy of `array`.
pub fn steps(algorithm: AlgorithmId, array: &[u32]) -> StepProducer {
    StepProducer::new(algorithm, array.to_vec())
}
