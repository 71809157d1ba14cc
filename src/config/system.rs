//! System configuration - root configuration structure.

use serde::Deserialize;

use super::thrower::ThrowerConfig;
use super::trickler::TricklerConfig;

/// Root configuration structure from TOML.
///
/// Both sections are optional; a missing section takes the stock wiring
/// (thrower on pins 6/12/13, trickler on pin 18).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct MotorsConfig {
    /// Thrower stepper motor.
    pub thrower: ThrowerConfig,

    /// Trickler vibration motor.
    pub trickler: TricklerConfig,
}

impl MotorsConfig {
    /// Every configured pin with the line it drives.
    pub fn pin_assignments(&self) -> [(&'static str, u8); 4] {
        [
            ("thrower.dir_pin", self.thrower.dir_pin),
            ("thrower.step_pin", self.thrower.step_pin),
            ("thrower.enable_pin", self.thrower.enable_pin),
            ("trickler.pin", self.trickler.pin),
        ]
    }
}
