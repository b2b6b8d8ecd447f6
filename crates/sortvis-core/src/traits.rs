//! Seams between the playback driver and its host: where snapshots go,
//! and how the driver suspends between them.

use std::time::Duration;

use crate::id::{LaneId, Layout, RunId, RunMode};
use crate::snapshot::Snapshot;

/// A display that renders the full array of one or two lanes.
///
/// The driver calls [`publish`](DisplaySurface::publish) once per emitted
/// snapshot; each call replaces the lane's previously displayed state in
/// full. Single-lane runs publish on [`LaneId::A`].
pub trait DisplaySurface {
    /// Replace the displayed contents of `lane` with `snapshot`.
    fn publish(&mut self, lane: LaneId, snapshot: &Snapshot);

    /// Called when a run enters the running state, before any snapshot.
    fn run_started(&mut self, _run: RunId, _mode: RunMode) {}

    /// Called after the last producer of a run is exhausted.
    fn run_finished(&mut self, _run: RunId) {}

    /// Called when the mode or a lane selection changes while idle, and
    /// once at construction, before the arrays are republished.
    fn layout_changed(&mut self, _layout: Layout) {}
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for &mut D {
    fn publish(&mut self, lane: LaneId, snapshot: &Snapshot) {
        (**self).publish(lane, snapshot);
    }

    fn run_started(&mut self, run: RunId, mode: RunMode) {
        (**self).run_started(run, mode);
    }

    fn run_finished(&mut self, run: RunId) {
        (**self).run_finished(run);
    }

    fn layout_changed(&mut self, layout: Layout) {
        (**self).layout_changed(layout);
    }
}

/// The cooperative suspension point between two publications.
///
/// The driver calls `sleep` after publishing and does not pull the next
/// snapshot until it returns.
pub trait Sleeper {
    /// Block for `delay`.
    fn sleep(&mut self, delay: Duration);
}

/// Suspends the calling thread with [`std::thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep(&mut self, delay: Duration) {
        (**self).sleep(delay);
    }
}
