//! Step pulse timing for the thrower sequence.

use core::time::Duration;

use serde::Deserialize;

use super::units::{Microseconds, Milliseconds};

/// Timing of one throw: pulse widths and the pause between the two half-cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct PulseTiming {
    /// Time the step line is held on for each pulse.
    #[serde(rename = "pulse_high_us")]
    pub pulse_high: Microseconds,

    /// Time the step line is held off after each pulse.
    #[serde(rename = "pulse_low_us")]
    pub pulse_low: Microseconds,

    /// De-energized pause between the fill and return rotations.
    #[serde(rename = "settle_ms")]
    pub settle: Milliseconds,
}

impl PulseTiming {
    /// 0.1 ms high, 2 ms low, 2 s settle.
    pub const DEFAULT: Self = Self {
        pulse_high: Microseconds(100),
        pulse_low: Microseconds(2_000),
        settle: Milliseconds(2_000),
    };

    /// Duration of a single step pulse (high plus low).
    pub fn pulse_period(&self) -> Duration {
        self.pulse_high.as_duration() + self.pulse_low.as_duration()
    }

    /// Total blocking time of one throw with `step_count` pulses per half-cycle.
    pub fn throw_duration(&self, step_count: u32) -> Duration {
        self.pulse_period() * step_count * 2 + self.settle.as_duration()
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
