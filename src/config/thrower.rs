//! Thrower (stepper) motor configuration from TOML.

use serde::Deserialize;

use super::timing::PulseTiming;

/// Thrower motor wiring and step count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct ThrowerConfig {
    /// BCM pin driving the direction input.
    pub dir_pin: u8,

    /// BCM pin driving the step input.
    pub step_pin: u8,

    /// BCM pin driving the enable input.
    pub enable_pin: u8,

    /// Steps per half-cycle (drum rotation in one direction).
    pub step_count: u32,

    /// Enable input is active-low (typical for A4988/DRV8825 boards).
    pub enable_active_low: bool,

    /// Pulse and settle timing.
    pub timing: PulseTiming,
}

impl Default for ThrowerConfig {
    fn default() -> Self {
        Self {
            dir_pin: 6,
            step_pin: 12,
            enable_pin: 13,
            step_count: 180,
            enable_active_low: true,
            timing: PulseTiming::DEFAULT,
        }
    }
}

impl ThrowerConfig {
    /// All pins used by the thrower, in `[dir, step, enable]` order.
    pub fn pins(&self) -> [u8; 3] {
        [self.dir_pin, self.step_pin, self.enable_pin]
    }
}
