//! The per-visualizer run state machine: `Idle → Running → Idle`.

use std::fmt;

use sortvis_core::{ControlError, RunId};

/// Whether a run is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No run active; every control is available.
    #[default]
    Idle,
    /// A run is being played back; only the speed control is honored.
    Running(RunId),
}

impl RunState {
    /// Whether a run is in progress.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// Enter `Running` with the id after `last`.
    ///
    /// Refused with [`ControlError::Busy`] if a run is already active; the
    /// state is left untouched in that case.
    pub fn begin(&mut self, last: RunId) -> Result<RunId, ControlError> {
        match *self {
            Self::Running(_) => Err(ControlError::Busy),
            Self::Idle => {
                let run = last.next();
                *self = Self::Running(run);
                Ok(run)
            }
        }
    }

    /// Return to `Idle` after natural completion of `run`.
    pub fn finish(&mut self, run: RunId) {
        debug_assert_eq!(*self, Self::Running(run), "finishing a run that is not active");
        *self = Self::Idle;
    }

    /// `Ok(())` when idle, `Err(Busy)` while running.
    pub fn ensure_idle(self) -> Result<(), ControlError> {
        if self.is_running() {
            Err(ControlError::Busy)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Running(run) => write!(f, "running (run {run})"),
        }
    }
}
