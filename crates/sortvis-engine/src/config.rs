//! Visualizer configuration, validation, and error types.
//!
//! [`VisualizerConfig`] is the constructor input for a
//! [`Visualizer`](crate::Visualizer). [`validate()`](VisualizerConfig::validate)
//! checks the bounded ranges once at startup; after that every control
//! input is either an enumerated choice or clamped, so nothing downstream
//! can fail.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use sortvis_core::AlgorithmId;

// ── Delay ──────────────────────────────────────────────────────────

/// Per-step playback delay, in milliseconds.
///
/// Always within `MIN_MS..=MAX_MS` and a multiple of `STEP_MS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delay(u64);

impl Delay {
    /// Shortest delay the speed control offers.
    pub const MIN_MS: u64 = 50;
    /// Longest delay the speed control offers.
    pub const MAX_MS: u64 = 1000;
    /// Granularity of the speed control.
    pub const STEP_MS: u64 = 50;
    /// Delay used when nothing else is configured.
    pub const DEFAULT: Delay = Delay(200);

    /// Validate an exact millisecond value.
    pub fn new(ms: u64) -> Result<Self, ConfigError> {
        if !(Self::MIN_MS..=Self::MAX_MS).contains(&ms) {
            return Err(ConfigError::DelayOutOfRange { value: ms });
        }
        if ms % Self::STEP_MS != 0 {
            return Err(ConfigError::DelayNotOnStep { value: ms });
        }
        Ok(Self(ms))
    }

    /// Clamp `ms` into range and round to the nearest step (ties round up).
    ///
    /// This is what the speed control uses: a slider value can be
    /// anything, the delay it produces is always valid.
    pub fn saturating_from_ms(ms: u64) -> Self {
        let clamped = ms.clamp(Self::MIN_MS, Self::MAX_MS);
        let rounded = (clamped + Self::STEP_MS / 2) / Self::STEP_MS * Self::STEP_MS;
        Self(rounded.min(Self::MAX_MS))
    }

    /// The delay in milliseconds.
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// The delay as a [`Duration`].
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`VisualizerConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Value range is empty or includes zero (bars need positive heights).
    InvalidValueRange {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
    },
    /// Delay outside `Delay::MIN_MS..=Delay::MAX_MS`.
    DelayOutOfRange {
        /// The rejected value.
        value: u64,
    },
    /// Delay is not a multiple of `Delay::STEP_MS`.
    DelayNotOnStep {
        /// The rejected value.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValueRange { min, max } => {
                write!(f, "value range {min}..={max} must be non-empty and positive")
            }
            Self::DelayOutOfRange { value } => write!(
                f,
                "delay {value} ms outside {}..={} ms",
                Delay::MIN_MS,
                Delay::MAX_MS
            ),
            Self::DelayNotOnStep { value } => {
                write!(f, "delay {value} ms is not a multiple of {} ms", Delay::STEP_MS)
            }
        }
    }
}

impl Error for ConfigError {}

// ── VisualizerConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualizerConfig {
    /// Elements per generated array. Default: 20.
    pub array_len: usize,
    /// Smallest generated value (inclusive). Default: 5.
    pub value_min: u32,
    /// Largest generated value (inclusive). Default: 104.
    pub value_max: u32,
    /// Seed for array generation. Same seed, same sequence of resets.
    pub seed: u64,
    /// Initial per-step delay in milliseconds. Default: 200.
    pub delay_ms: u64,
    /// Start in comparison (two-lane) mode. Default: false.
    pub compare_mode: bool,
    /// Initial algorithm for lane A. Default: Bubble.
    pub lane_a: AlgorithmId,
    /// Initial algorithm for lane B. Default: Insertion.
    pub lane_b: AlgorithmId,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            array_len: 20,
            value_min: 5,
            value_max: 104,
            seed: 0,
            delay_ms: Delay::DEFAULT.as_millis(),
            compare_mode: false,
            lane_a: AlgorithmId::Bubble,
            lane_b: AlgorithmId::Insertion,
        }
    }
}

impl VisualizerConfig {
    /// Validate all bounded ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_min == 0 || self.value_min > self.value_max {
            return Err(ConfigError::InvalidValueRange {
                min: self.value_min,
                max: self.value_max,
            });
        }
        Delay::new(self.delay_ms)?;
        Ok(())
    }

    /// The validated initial delay.
    pub fn delay(&self) -> Result<Delay, ConfigError> {
        Delay::new(self.delay_ms)
    }
}
