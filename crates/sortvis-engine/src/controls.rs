//! Control commands, the handle used to queue them, and receipts.
//!
//! Controls reach a [`Visualizer`](crate::Visualizer) either as direct
//! method calls (when the caller owns it) or through a [`ControlHandle`]
//! from anywhere else. Queued controls are applied between steps while a
//! run is in progress and on [`process_controls`](crate::Visualizer::process_controls)
//! while idle. Refused controls leave all state untouched.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use sortvis_core::{AlgorithmId, ControlError, LaneId};

/// A control action from the controls surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Regenerate the array (and both lane copies). Refused while running.
    Reset,
    /// Switch between single-lane and comparison mode. Refused while running.
    ToggleMode,
    /// Set the per-step delay in milliseconds (clamped). Always accepted;
    /// applies from the next wait.
    SetSpeed(u64),
    /// Choose the algorithm for one comparison lane. Refused while
    /// running and outside comparison mode.
    SelectLane(LaneId, AlgorithmId),
}

/// Outcome of a control action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Whether the action was applied.
    pub accepted: bool,
    /// Why it was refused, if it was.
    pub reason: Option<ControlError>,
}

impl Receipt {
    /// An applied action.
    pub fn accepted() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    /// A refused action.
    pub fn rejected(reason: ControlError) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }

    /// Convert a guard result into a receipt.
    pub fn from_result(result: Result<(), ControlError>) -> Self {
        match result {
            Ok(()) => Self::accepted(),
            Err(reason) => Self::rejected(reason),
        }
    }
}

/// Cloneable, `Send` handle for queueing [`Control`]s.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    tx: Sender<Control>,
}

impl ControlHandle {
    /// Queue `control` for the visualizer.
    ///
    /// Fails only if the visualizer has been dropped, or if the bounded
    /// queue is full (reported as [`ControlError::Busy`]).
    pub fn send(&self, control: Control) -> Result<(), ControlError> {
        self.tx.try_send(control).map_err(|e| match e {
            TrySendError::Full(_) => ControlError::Busy,
            TrySendError::Disconnected(_) => ControlError::ChannelClosed,
        })
    }
}

/// Maximum controls queued between two drains.
pub(crate) const CONTROL_QUEUE_CAPACITY: usize = 256;

/// Create the bounded control channel.
pub(crate) fn channel() -> (ControlHandle, Receiver<Control>) {
    let (tx, rx) = crossbeam_channel::bounded(CONTROL_QUEUE_CAPACITY);
    (ControlHandle { tx }, rx)
}
