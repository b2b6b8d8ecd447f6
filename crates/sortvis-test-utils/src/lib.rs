//! Test utilities and recording fixtures for sortvis development.
//!
//! Provides recording implementations of the core traits
//! ([`DisplaySurface`], [`Sleeper`]) so playback can be asserted on
//! without a real display or real delays, plus canned input arrays.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::time::Duration;

use sortvis_core::{DisplaySurface, LaneId, Layout, RunId, RunMode, Sleeper, Snapshot};

pub use fixtures::{
    bubble_scenario, insertion_trace_input, reversed, selection_scenario, REFERENCE_LEN,
};

/// One observable event on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    Started(RunId, RunMode),
    Published(LaneId, Snapshot),
    Finished(RunId),
    Layout(Layout),
}

/// [`DisplaySurface`] that records every call in order.
///
/// Also keeps the currently displayed snapshot per lane, the way a real
/// display would after each full redraw.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    shown: [Option<Snapshot>; 2],
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Snapshots published on `lane`, oldest first.
    pub fn published(&self, lane: LaneId) -> Vec<Snapshot> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Published(l, s) if *l == lane => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Total number of publications across both lanes.
    pub fn publish_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Published(..)))
            .count()
    }

    /// Layouts announced so far, oldest first.
    pub fn layouts(&self) -> Vec<Layout> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Layout(layout) => Some(*layout),
                _ => None,
            })
            .collect()
    }

    /// What `lane` currently shows.
    pub fn shown(&self, lane: LaneId) -> Option<&Snapshot> {
        self.shown[lane.index()].as_ref()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn publish(&mut self, lane: LaneId, snapshot: &Snapshot) {
        self.shown[lane.index()] = Some(snapshot.clone());
        self.events
            .push(SurfaceEvent::Published(lane, snapshot.clone()));
    }

    fn run_started(&mut self, run: RunId, mode: RunMode) {
        self.events.push(SurfaceEvent::Started(run, mode));
    }

    fn run_finished(&mut self, run: RunId) {
        self.events.push(SurfaceEvent::Finished(run));
    }

    fn layout_changed(&mut self, layout: Layout) {
        if layout.lane_count() == 1 {
            self.shown[LaneId::B.index()] = None;
        }
        self.events.push(SurfaceEvent::Layout(layout));
    }
}

type SleepHook = Box<dyn FnMut(usize) + Send>;

/// [`Sleeper`] that returns immediately and records each requested delay.
///
/// An optional hook runs inside every `sleep` call with the zero-based
/// index of that wait, which lets a test inject control messages while a
/// run is suspended.
#[derive(Default)]
pub struct RecordingSleeper {
    waits: Vec<Duration>,
    hook: Option<SleepHook>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook(wait_index)` during each sleep.
    pub fn with_hook(hook: impl FnMut(usize) + Send + 'static) -> Self {
        Self {
            waits: Vec::new(),
            hook: Some(Box::new(hook)),
        }
    }

    /// Every requested delay, oldest first.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    pub fn wait_count(&self) -> usize {
        self.waits.len()
    }

    /// Sum of all requested delays.
    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl std::fmt::Debug for RecordingSleeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSleeper")
            .field("waits", &self.waits)
            .field("has_hook", &self.hook.is_some())
            .finish()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, delay: Duration) {
        let index = self.waits.len();
        self.waits.push(delay);
        if let Some(hook) = self.hook.as_mut() {
            hook(index);
        }
    }
}
