//! Per-run playback metrics.
//!
//! [`RunMetrics`] is filled in by the playback loop and handed back in
//! the [`RunReport`](crate::RunReport); the most recent one is also kept
//! on the visualizer.

use std::time::Duration;

use smallvec::SmallVec;
use sortvis_core::{LaneId, RunId, RunMode};

/// Counters collected during one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunMetrics {
    /// The run these metrics describe.
    pub run_id: RunId,
    /// What was played.
    pub mode: RunMode,
    /// Lockstep cycles executed (each cycle publishes on at least one lane).
    pub cycles: u64,
    /// Snapshots published per lane.
    pub lane_steps: SmallVec<[(LaneId, u64); 2]>,
    /// Number of waits between publications.
    pub waits: u64,
    /// Sum of all requested waits.
    pub waited: Duration,
    /// Queued controls refused because the run was in progress.
    pub rejected_controls: u64,
    /// Speed changes applied during the run.
    pub speed_changes: u64,
}

impl RunMetrics {
    /// Empty metrics for a run that is about to start.
    pub fn new(run_id: RunId, mode: RunMode) -> Self {
        Self {
            run_id,
            mode,
            cycles: 0,
            lane_steps: SmallVec::new(),
            waits: 0,
            waited: Duration::ZERO,
            rejected_controls: 0,
            speed_changes: 0,
        }
    }

    /// Snapshots published on `lane` (0 if the lane was not used).
    pub fn steps(&self, lane: LaneId) -> u64 {
        self.lane_steps
            .iter()
            .find(|(l, _)| *l == lane)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use sortvis_core::AlgorithmId;

    #[test]
    fn new_metrics_are_zero() {
        let m = RunMetrics::new(RunId(1), RunMode::Single(AlgorithmId::Bubble));
        assert_eq!(m.cycles, 0);
        assert!(m.lane_steps.is_empty());
        assert_eq!(m.waits, 0);
        assert_eq!(m.waited, Duration::ZERO);
        assert_eq!(m.rejected_controls, 0);
        assert_eq!(m.speed_changes, 0);
    }

    #[test]
    fn steps_per_lane() {
        let mut m = RunMetrics::new(
            RunId(2),
            RunMode::Compare {
                a: AlgorithmId::Bubble,
                b: AlgorithmId::Selection,
            },
        );
        m.lane_steps = smallvec![(LaneId::A, 10), (LaneId::B, 8)];
        assert_eq!(m.steps(LaneId::A), 10);
        assert_eq!(m.steps(LaneId::B), 8);

        let single = RunMetrics::new(RunId(3), RunMode::Single(AlgorithmId::Insertion));
        assert_eq!(single.steps(LaneId::B), 0);
    }
}
