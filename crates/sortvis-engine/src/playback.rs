//! Lockstep playback of one or two step producers.
//!
//! [`Playback`] is the lower-level driver behind
//! [`Visualizer::run`](crate::Visualizer::run). Each cycle it pulls the
//! next snapshot from every lane that is not yet exhausted, publishes the
//! snapshots it got, then waits once. Lanes advance by cycle count, not by
//! elapsed work: a lane that runs out simply stops updating and keeps its
//! last snapshot on display while the other continues at the same cadence.
//!
//! # Ordering
//!
//! Within a cycle: pull all lanes → publish → compute the next delay →
//! wait. The next pull happens only after the wait returns. There is no
//! cancellation; `play` returns once every lane is exhausted.

use smallvec::SmallVec;
use sortvis_core::{AlgorithmId, DisplaySurface, LaneId, RunMode, Sleeper, Snapshot};
use sortvis_steps::StepProducer;

use crate::config::Delay;
use crate::metrics::RunMetrics;

/// One producer bound to a display lane.
#[derive(Clone, Debug)]
pub struct Lane {
    id: LaneId,
    producer: StepProducer,
    last: Option<Snapshot>,
    exhausted: bool,
}

impl Lane {
    /// Bind a fresh producer for `algorithm` over `array` to lane `id`.
    pub fn new(id: LaneId, algorithm: AlgorithmId, array: Vec<u32>) -> Self {
        Self {
            id,
            producer: StepProducer::new(algorithm, array),
            last: None,
            exhausted: false,
        }
    }

    /// Which display lane this is.
    pub fn id(&self) -> LaneId {
        self.id
    }

    /// The algorithm driving this lane.
    pub fn algorithm(&self) -> AlgorithmId {
        self.producer.algorithm()
    }

    /// The most recently published snapshot, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// Whether the producer has signalled exhaustion.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Snapshots published on this lane so far.
    pub fn steps(&self) -> u64 {
        self.producer.emitted()
    }

    fn pull(&mut self) -> Option<Snapshot> {
        if self.exhausted {
            return None;
        }
        let next = self.producer.next();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }
}

/// Drives one (single mode) or two (comparison mode) lanes in lockstep.
#[derive(Clone, Debug)]
pub struct Playback {
    mode: RunMode,
    lanes: SmallVec<[Lane; 2]>,
}

impl Playback {
    /// Single-lane playback of `algorithm` over `array`, published on lane A.
    pub fn single(algorithm: AlgorithmId, array: Vec<u32>) -> Self {
        let mut lanes = SmallVec::new();
        lanes.push(Lane::new(LaneId::A, algorithm, array));
        Self {
            mode: RunMode::Single(algorithm),
            lanes,
        }
    }

    /// Comparison playback: lane A runs `a` over `array_a`, lane B runs `b`
    /// over `array_b`.
    pub fn compare(
        (a, array_a): (AlgorithmId, Vec<u32>),
        (b, array_b): (AlgorithmId, Vec<u32>),
    ) -> Self {
        let mut lanes = SmallVec::new();
        lanes.push(Lane::new(LaneId::A, a, array_a));
        lanes.push(Lane::new(LaneId::B, b, array_b));
        Self {
            mode: RunMode::Compare { a, b },
            lanes,
        }
    }

    /// What this playback animates.
    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// The lanes, A first.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// The lane bound to `id`, if this playback uses it.
    pub fn lane(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.id == id)
    }

    /// Whether every lane is exhausted.
    pub fn is_finished(&self) -> bool {
        self.lanes.iter().all(Lane::is_exhausted)
    }

    /// Run one lockstep cycle without waiting.
    ///
    /// Every non-exhausted lane is asked for its next snapshot; then each
    /// snapshot obtained is published on its lane. Returns `false` (and
    /// publishes nothing) once all lanes are exhausted.
    pub fn cycle<D: DisplaySurface + ?Sized>(&mut self, display: &mut D) -> bool {
        let pulled: SmallVec<[(usize, Snapshot); 2]> = self
            .lanes
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, lane)| lane.pull().map(|snap| (idx, snap)))
            .collect();
        if pulled.is_empty() {
            return false;
        }
        for (idx, snapshot) in pulled {
            let lane = &mut self.lanes[idx];
            tracing::trace!(lane = %lane.id, step = lane.steps(), "publish");
            display.publish(lane.id, &snapshot);
            lane.last = Some(snapshot);
        }
        true
    }

    /// Play every lane to exhaustion.
    ///
    /// After each cycle's publications, `before_wait` is called to obtain
    /// the delay for that cycle's wait; this is where queued controls are
    /// applied, so a speed change never alters a wait already in progress.
    /// A playback whose lanes yield nothing publishes nothing and never
    /// waits.
    pub fn play<D, S, F>(
        &mut self,
        display: &mut D,
        sleeper: &mut S,
        mut before_wait: F,
        metrics: &mut RunMetrics,
    ) where
        D: DisplaySurface + ?Sized,
        S: Sleeper + ?Sized,
        F: FnMut(&mut RunMetrics) -> Delay,
    {
        while self.cycle(display) {
            metrics.cycles += 1;
            let delay = before_wait(metrics);
            metrics.waits += 1;
            metrics.waited += delay.as_duration();
            sleeper.sleep(delay.as_duration());
        }
        metrics.lane_steps = self.lanes.iter().map(|l| (l.id, l.steps())).collect();
    }

    /// Last snapshot of every lane that published at least once.
    pub fn finals(&self) -> SmallVec<[(LaneId, Snapshot); 2]> {
        self.lanes
            .iter()
            .filter_map(|l| l.last.clone().map(|s| (l.id, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::RunId;
    use sortvis_test_utils::{RecordingSleeper, RecordingSurface};

    fn metrics(mode: RunMode) -> RunMetrics {
        RunMetrics::new(RunId(1), mode)
    }

    #[test]
    fn single_lane_publishes_then_waits_per_step() {
        let mut pb = Playback::single(AlgorithmId::Bubble, vec![9, 1, 8, 2, 7]);
        let mut surface = RecordingSurface::new();
        let mut sleeper = RecordingSleeper::new();
        let mut m = metrics(pb.mode());
        pb.play(&mut surface, &mut sleeper, |_| Delay::DEFAULT, &mut m);

        assert_eq!(surface.published(LaneId::A).len(), 10);
        assert!(surface.published(LaneId::B).is_empty());
        assert_eq!(sleeper.wait_count(), 10);
        assert_eq!(m.cycles, 10);
        assert_eq!(m.steps(LaneId::A), 10);
        assert!(pb.is_finished());
        assert_eq!(pb.finals()[0].1, [1, 2, 7, 8, 9]);
    }

    #[test]
    fn trivial_array_never_publishes_or_waits() {
        let mut pb = Playback::single(AlgorithmId::Insertion, vec![3]);
        let mut surface = RecordingSurface::new();
        let mut sleeper = RecordingSleeper::new();
        let mut m = metrics(pb.mode());
        pb.play(&mut surface, &mut sleeper, |_| Delay::DEFAULT, &mut m);
        assert_eq!(surface.publish_count(), 0);
        assert_eq!(sleeper.wait_count(), 0);
        assert!(pb.finals().is_empty());
    }

    #[test]
    fn cycle_pulls_both_lanes() {
        let mut pb = Playback::compare(
            (AlgorithmId::Bubble, vec![2, 1]),
            (AlgorithmId::Selection, vec![2, 1]),
        );
        let mut surface = RecordingSurface::new();
        assert!(pb.cycle(&mut surface));
        assert_eq!(surface.publish_count(), 2);
        // Bubble: 1 step. Selection: comparison + swap = 2 steps.
        assert!(pb.cycle(&mut surface));
        assert_eq!(surface.published(LaneId::A).len(), 1);
        assert_eq!(surface.published(LaneId::B).len(), 2);
        assert!(!pb.cycle(&mut surface));
        assert!(pb.is_finished());
        assert_eq!(pb.lane(LaneId::A).unwrap().last().unwrap(), &[1, 2]);
    }

    #[test]
    fn delay_is_requested_once_per_cycle() {
        let mut pb = Playback::single(AlgorithmId::Selection, vec![4, 3, 2, 1]);
        let mut surface = RecordingSurface::new();
        let mut sleeper = RecordingSleeper::new();
        let mut m = metrics(pb.mode());
        let mut calls = 0;
        pb.play(
            &mut surface,
            &mut sleeper,
            |_| {
                calls += 1;
                Delay::saturating_from_ms(50 * calls)
            },
            &mut m,
        );
        assert_eq!(calls, 8);
        assert_eq!(sleeper.waits()[0].as_millis(), 50);
        assert_eq!(sleeper.waits()[7].as_millis(), 400);
    }
}
