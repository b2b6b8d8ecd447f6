//! Strongly-typed identifiers: algorithms, lanes, runs.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAlgorithmError;

/// Identifies one of the supported sorting algorithms.
///
/// Each variant maps to exactly one step producer constructor. The
/// declaration order is the order controls present them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmId {
    /// Adjacent compare-and-swap passes.
    Bubble,
    /// Shift larger elements right, then place the held key.
    Insertion,
    /// Scan for the minimum of the unsorted suffix, then swap it in.
    Selection,
}

impl AlgorithmId {
    /// All algorithms, in presentation order.
    pub const ALL: [AlgorithmId; 3] = [Self::Bubble, Self::Insertion, Self::Selection];

    /// Short display name (`"Bubble"`, `"Insertion"`, `"Selection"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble",
            Self::Insertion => "Insertion",
            Self::Selection => "Selection",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = ParseAlgorithmError;

    /// Parses a case-insensitive algorithm name. A trailing `" sort"` is
    /// accepted, so both `"bubble"` and `"Bubble Sort"` resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let name = lower.strip_suffix(" sort").unwrap_or(&lower).trim_end();
        Self::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAlgorithmError {
                input: trimmed.to_string(),
            })
    }
}

/// One of the two side-by-side lanes.
///
/// Single-lane playback always publishes on [`LaneId::A`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LaneId {
    /// Left lane; the only lane in single mode.
    A,
    /// Right lane, comparison mode only.
    B,
}

impl LaneId {
    /// Both lanes, left to right.
    pub const BOTH: [LaneId; 2] = [Self::A, Self::B];

    /// Zero-based position of the lane (A = 0, B = 1).
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Identifies a single run within one visualizer.
///
/// Assigned sequentially starting at 1; `RunId(0)` means "no run yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub u64);

impl RunId {
    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RunId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// What a run is animating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// One algorithm on lane A.
    Single(AlgorithmId),
    /// Two algorithms in lockstep, one per lane.
    Compare {
        /// Algorithm on lane A.
        a: AlgorithmId,
        /// Algorithm on lane B.
        b: AlgorithmId,
    },
}

impl RunMode {
    /// Number of lanes this run drives (1 or 2).
    pub fn lane_count(self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Compare { .. } => 2,
        }
    }

    /// Algorithm driving `lane`, if the run uses that lane.
    pub fn algorithm(self, lane: LaneId) -> Option<AlgorithmId> {
        match (self, lane) {
            (Self::Single(algo), LaneId::A) => Some(algo),
            (Self::Single(_), LaneId::B) => None,
            (Self::Compare { a, .. }, LaneId::A) => Some(a),
            (Self::Compare { b, .. }, LaneId::B) => Some(b),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(algo) => write!(f, "{algo}"),
            Self::Compare { a, b } => write!(f, "{a} vs {b}"),
        }
    }
}

/// How the display is arranged between runs: one unlabeled lane, or two
/// lanes labeled with their selected algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Single-lane mode; only lane A is shown.
    Single,
    /// Comparison mode with the algorithm selected for each lane.
    Compare {
        /// Algorithm selected for lane A.
        a: AlgorithmId,
        /// Algorithm selected for lane B.
        b: AlgorithmId,
    },
}

impl Layout {
    /// Number of lanes shown (1 or 2).
    pub fn lane_count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Compare { .. } => 2,
        }
    }

    /// Algorithm selected for `lane`; `None` in single-lane mode.
    pub fn algorithm(self, lane: LaneId) -> Option<AlgorithmId> {
        match (self, lane) {
            (Self::Single, _) => None,
            (Self::Compare { a, .. }, LaneId::A) => Some(a),
            (Self::Compare { b, .. }, LaneId::B) => Some(b),
        }
    }
}
