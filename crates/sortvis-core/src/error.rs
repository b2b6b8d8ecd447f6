//! Error types for the sortvis workspace.
//!
//! Inputs are either internally generated (random arrays) or drawn from
//! enumerated choices, so the taxonomy is small: parsing an algorithm
//! name, and refusing a control action.

use std::error::Error;
use std::fmt;

/// An algorithm name did not match any [`AlgorithmId`](crate::AlgorithmId).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The (trimmed) input that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected Bubble, Insertion or Selection)",
            self.input
        )
    }
}

impl Error for ParseAlgorithmError {}

/// Why a control action was refused.
///
/// Refusals never change array or run state; they are reported through
/// receipts so callers can grey out the corresponding control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlError {
    /// A run is in progress; reset, start, mode and lane changes wait
    /// until it completes.
    Busy,
    /// The action belongs to the other presentation mode (e.g. starting a
    /// comparison while in single-lane mode).
    ModeMismatch,
    /// The control channel has no receiver left.
    ChannelClosed,
    /// A loaded array contains a zero; values start at 1.
    ZeroValue,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "a run is already in progress"),
            Self::ModeMismatch => write!(f, "action not available in the current mode"),
            Self::ChannelClosed => write!(f, "control channel closed"),
            Self::ZeroValue => write!(f, "array values must be at least 1"),
        }
    }
}

impl Error for ControlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ParseAlgorithmError {
            input: "heap".into(),
        };
        assert!(err.to_string().contains("'heap'"));
        assert_eq!(ControlError::Busy.to_string(), "a run is already in progress");
        assert_eq!(
            ControlError::ChannelClosed.to_string(),
            "control channel closed"
        );
    }
}
