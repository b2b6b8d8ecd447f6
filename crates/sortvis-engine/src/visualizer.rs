//! The visualizer: arrays, mode, lane selections, speed, and run state
//! for one display surface.
//!
//! [`Visualizer`] is the primary user-facing API. It owns the display and
//! the sleeper; [`run()`](Visualizer::run) and
//! [`run_comparison()`](Visualizer::run_comparison) block the calling
//! thread until the run completes, suspending in the sleeper between
//! publications.
//!
//! # Guards
//!
//! While a run is in progress the only control honored is the speed
//! control. Reset, mode toggle and lane selection queued through a
//! [`ControlHandle`] during a run are refused with [`ControlError::Busy`]
//! and change nothing. Since runs take `&mut self`, direct method calls
//! cannot overlap a run at all.

use std::collections::VecDeque;

use crossbeam_channel::Receiver;
use smallvec::SmallVec;
use sortvis_core::{
    AlgorithmId, ControlError, DisplaySurface, LaneId, Layout, RunId, RunMode, Sleeper, Snapshot,
};

use crate::array::ArrayGenerator;
use crate::config::{ConfigError, Delay, VisualizerConfig};
use crate::controls::{self, Control, ControlHandle, Receipt};
use crate::metrics::RunMetrics;
use crate::playback::Playback;
use crate::run_state::RunState;

// ── RunReport ───────────────────────────────────────────────────

/// Result of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// The run that completed.
    pub run_id: RunId,
    /// Counters collected during playback.
    pub metrics: RunMetrics,
    /// Last published snapshot per lane (empty if nothing was published).
    pub finals: SmallVec<[(LaneId, Snapshot); 2]>,
}

// ── ControlQueue ────────────────────────────────────────────────

/// Receipts kept for [`Visualizer::process_controls`]; older ones are
/// dropped first once the log is full.
pub const RECEIPT_LOG_CAPACITY: usize = 256;

/// Receiving side of the control channel plus the state it may touch
/// while a run is in progress.
struct ControlQueue {
    handle: ControlHandle,
    rx: Receiver<Control>,
    delay: Delay,
    receipts: VecDeque<(Control, Receipt)>,
}

impl ControlQueue {
    fn record(&mut self, control: Control, receipt: Receipt) {
        if self.receipts.len() == RECEIPT_LOG_CAPACITY {
            self.receipts.pop_front();
        }
        self.receipts.push_back((control, receipt));
    }

    fn set_speed(&mut self, ms: u64) -> bool {
        let delay = Delay::saturating_from_ms(ms);
        let changed = delay != self.delay;
        self.delay = delay;
        changed
    }

    /// Apply controls queued during a run and return the delay for the
    /// coming wait.
    fn drain_running(&mut self, metrics: &mut RunMetrics) -> Delay {
        while let Ok(control) = self.rx.try_recv() {
            let receipt = match control {
                Control::SetSpeed(ms) => {
                    if self.set_speed(ms) {
                        metrics.speed_changes += 1;
                        tracing::debug!(run = %metrics.run_id, delay = %self.delay, "speed changed");
                    }
                    Receipt::accepted()
                }
                other => {
                    metrics.rejected_controls += 1;
                    tracing::debug!(run = %metrics.run_id, control = ?other, "control refused while running");
                    Receipt::rejected(ControlError::Busy)
                }
            };
            self.record(control, receipt);
        }
        self.delay
    }
}

// ── Visualizer ──────────────────────────────────────────────────

/// Step-animation controller for one display surface.
///
/// Holds the current array (single mode) and one array per lane
/// (comparison mode). A reset assigns the same fresh array to all three.
/// Runs work on private copies; once a run completes, each lane it drove
/// shows (and keeps) its last snapshot.
///
/// # Example
///
/// ```
/// use sortvis_core::{AlgorithmId, LaneId, Snapshot, DisplaySurface, Sleeper};
/// use sortvis_engine::{Visualizer, VisualizerConfig};
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Frames(Vec<Snapshot>);
/// impl DisplaySurface for Frames {
///     fn publish(&mut self, _lane: LaneId, snapshot: &Snapshot) {
///         self.0.push(snapshot.clone());
///     }
/// }
/// struct NoWait;
/// impl Sleeper for NoWait {
///     fn sleep(&mut self, _delay: Duration) {}
/// }
///
/// let mut vis = Visualizer::new(VisualizerConfig::default(), Frames::default(), NoWait).unwrap();
/// let report = vis.run(AlgorithmId::Bubble).unwrap();
/// assert_eq!(report.metrics.steps(LaneId::A), 190);
/// assert!(vis.array().windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct Visualizer<D, S> {
    config: VisualizerConfig,
    generator: ArrayGenerator,
    array: Vec<u32>,
    lanes: [Vec<u32>; 2],
    lane_algorithms: [AlgorithmId; 2],
    compare_mode: bool,
    state: RunState,
    last_run: RunId,
    queue: ControlQueue,
    display: D,
    sleeper: S,
    last_metrics: Option<RunMetrics>,
}

impl<D: DisplaySurface, S: Sleeper> Visualizer<D, S> {
    /// Create a visualizer from a [`VisualizerConfig`].
    ///
    /// Validates the configuration, generates the initial array and
    /// shows it on `display`.
    pub fn new(config: VisualizerConfig, display: D, sleeper: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let delay = config.delay()?;
        let mut generator = ArrayGenerator::from_config(&config);
        let array = generator.generate();
        let (handle, rx) = controls::channel();
        let mut vis = Self {
            lanes: [array.clone(), array.clone()],
            array,
            lane_algorithms: [config.lane_a, config.lane_b],
            compare_mode: config.compare_mode,
            generator,
            config,
            state: RunState::Idle,
            last_run: RunId::default(),
            queue: ControlQueue {
                handle,
                rx,
                delay,
                receipts: VecDeque::new(),
            },
            display,
            sleeper,
            last_metrics: None,
        };
        vis.announce_layout();
        vis.refresh_display();
        Ok(vis)
    }

    // ── Controls ────────────────────────────────────────────────

    /// A handle for queueing controls from elsewhere.
    pub fn controls(&self) -> ControlHandle {
        self.queue.handle.clone()
    }

    /// Regenerate the array and both lane copies.
    ///
    /// Refused while a run is in progress.
    pub fn reset(&mut self) -> Receipt {
        if let Err(e) = self.state.ensure_idle() {
            return Receipt::rejected(e);
        }
        let array = self.generator.generate();
        self.lanes = [array.clone(), array.clone()];
        self.array = array;
        tracing::info!(len = self.array.len(), "array reset");
        self.refresh_display();
        Receipt::accepted()
    }

    /// Replace the array and both lane copies with `array`.
    ///
    /// Like [`reset()`](Self::reset) but with caller-chosen contents.
    /// Refused while a run is in progress, and with
    /// [`ControlError::ZeroValue`] if any value is 0 (generated values
    /// are never below 1).
    pub fn load_array(&mut self, array: Vec<u32>) -> Receipt {
        if let Err(e) = self.state.ensure_idle() {
            return Receipt::rejected(e);
        }
        if array.contains(&0) {
            return Receipt::rejected(ControlError::ZeroValue);
        }
        self.lanes = [array.clone(), array.clone()];
        self.array = array;
        self.refresh_display();
        Receipt::accepted()
    }

    /// Switch between single-lane and comparison mode.
    ///
    /// Refused while a run is in progress.
    pub fn toggle_mode(&mut self) -> Receipt {
        if let Err(e) = self.state.ensure_idle() {
            return Receipt::rejected(e);
        }
        self.compare_mode = !self.compare_mode;
        tracing::debug!(compare_mode = self.compare_mode, "mode toggled");
        self.announce_layout();
        self.refresh_display();
        Receipt::accepted()
    }

    /// Set the per-step delay, clamped to the allowed range.
    ///
    /// Always accepted. During a run (via [`ControlHandle`]) it applies
    /// from the next wait.
    pub fn set_speed(&mut self, ms: u64) -> Receipt {
        self.queue.set_speed(ms);
        Receipt::accepted()
    }

    /// Choose the algorithm for a comparison lane.
    ///
    /// Refused while running, and in single-lane mode.
    pub fn select_lane(&mut self, lane: LaneId, algorithm: AlgorithmId) -> Receipt {
        let result = self.state.ensure_idle().and_then(|()| {
            if self.compare_mode {
                Ok(())
            } else {
                Err(ControlError::ModeMismatch)
            }
        });
        if result.is_ok() {
            self.lane_algorithms[lane.index()] = algorithm;
            self.announce_layout();
        }
        Receipt::from_result(result)
    }

    /// Apply every queued control and return the receipts produced since
    /// the last call, including refusals recorded during runs.
    ///
    /// At most [`RECEIPT_LOG_CAPACITY`] receipts are kept between calls;
    /// hosts that never call this lose only the oldest ones.
    pub fn process_controls(&mut self) -> Vec<(Control, Receipt)> {
        self.apply_queued();
        self.queue.receipts.drain(..).collect()
    }

    fn apply_queued(&mut self) {
        while let Ok(control) = self.queue.rx.try_recv() {
            let receipt = match control {
                Control::Reset => self.reset(),
                Control::ToggleMode => self.toggle_mode(),
                Control::SetSpeed(ms) => self.set_speed(ms),
                Control::SelectLane(lane, algo) => self.select_lane(lane, algo),
            };
            self.queue.record(control, receipt);
        }
    }

    // ── Runs ────────────────────────────────────────────────────

    /// Animate `algorithm` over a copy of the current array (single mode).
    ///
    /// Controls queued before the call are applied first. Blocks until the
    /// producer is exhausted; afterwards the array is the final snapshot.
    ///
    /// # Errors
    ///
    /// [`ControlError::ModeMismatch`] in comparison mode,
    /// [`ControlError::Busy`] if a run is already active.
    pub fn run(&mut self, algorithm: AlgorithmId) -> Result<RunReport, ControlError> {
        self.apply_queued();
        if self.compare_mode {
            return Err(ControlError::ModeMismatch);
        }
        let playback = Playback::single(algorithm, self.array.clone());
        self.execute(playback)
    }

    /// Animate the two selected lane algorithms in lockstep (comparison mode).
    ///
    /// Controls queued before the call are applied first. Blocks until
    /// both producers are exhausted.
    ///
    /// # Errors
    ///
    /// [`ControlError::ModeMismatch`] in single mode,
    /// [`ControlError::Busy`] if a run is already active.
    pub fn run_comparison(&mut self) -> Result<RunReport, ControlError> {
        self.apply_queued();
        if !self.compare_mode {
            return Err(ControlError::ModeMismatch);
        }
        let [a, b] = self.lane_algorithms;
        let playback = Playback::compare(
            (a, self.lanes[LaneId::A.index()].clone()),
            (b, self.lanes[LaneId::B.index()].clone()),
        );
        self.execute(playback)
    }

    fn execute(&mut self, mut playback: Playback) -> Result<RunReport, ControlError> {
        let run = self.state.begin(self.last_run)?;
        self.last_run = run;
        let mode = playback.mode();
        tracing::debug!(run = %run, mode = %mode, delay = %self.queue.delay, "run started");
        self.display.run_started(run, mode);

        let mut metrics = RunMetrics::new(run, mode);
        let queue = &mut self.queue;
        playback.play(
            &mut self.display,
            &mut self.sleeper,
            |m| queue.drain_running(m),
            &mut metrics,
        );

        let finals = playback.finals();
        for (lane, snapshot) in &finals {
            match mode {
                RunMode::Single(_) => self.array = snapshot.to_vec(),
                RunMode::Compare { .. } => self.lanes[lane.index()] = snapshot.to_vec(),
            }
        }

        self.state.finish(run);
        self.display.run_finished(run);
        tracing::debug!(
            run = %run,
            cycles = metrics.cycles,
            rejected = metrics.rejected_controls,
            "run finished"
        );
        self.last_metrics = Some(metrics.clone());
        Ok(RunReport {
            run_id: run,
            metrics,
            finals,
        })
    }

    fn announce_layout(&mut self) {
        let layout = self.layout();
        self.display.layout_changed(layout);
    }

    fn refresh_display(&mut self) {
        if self.compare_mode {
            for lane in LaneId::BOTH {
                let snapshot = Snapshot::new(&self.lanes[lane.index()]);
                self.display.publish(lane, &snapshot);
            }
        } else {
            self.display.publish(LaneId::A, &Snapshot::new(&self.array));
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The single-mode array as currently displayed.
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// The array of a comparison lane as currently displayed.
    pub fn lane(&self, lane: LaneId) -> &[u32] {
        &self.lanes[lane.index()]
    }

    /// Algorithm selected for a comparison lane.
    pub fn lane_algorithm(&self, lane: LaneId) -> AlgorithmId {
        self.lane_algorithms[lane.index()]
    }

    /// Current display arrangement: single lane, or the two selected
    /// comparison algorithms.
    pub fn layout(&self) -> Layout {
        if self.compare_mode {
            let [a, b] = self.lane_algorithms;
            Layout::Compare { a, b }
        } else {
            Layout::Single
        }
    }

    /// Whether comparison (two-lane) mode is active.
    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current per-step delay.
    pub fn delay(&self) -> Delay {
        self.queue.delay
    }

    /// The configuration this visualizer was built from.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Metrics of the most recent run.
    pub fn last_metrics(&self) -> Option<&RunMetrics> {
        self.last_metrics.as_ref()
    }

    /// The display surface.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the display surface.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The sleeper.
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }
}

impl<D, S> std::fmt::Debug for Visualizer<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualizer")
            .field("state", &self.state)
            .field("compare_mode", &self.compare_mode)
            .field("delay", &self.queue.delay)
            .field("lane_algorithms", &self.lane_algorithms)
            .field("array_len", &self.array.len())
            .finish()
    }
}
