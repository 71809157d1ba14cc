//! Trickler (vibration motor) configuration from TOML.

use serde::Deserialize;

use super::units::Percent;

/// Trickler motor wiring and speed clamps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct TricklerConfig {
    /// BCM pin carrying the PWM signal.
    pub pin: u8,

    /// Lowest percent `update_percent` will apply.
    pub min_percent: Percent,

    /// Highest percent `update_percent` will apply.
    pub max_percent: Percent,

    /// PWM frequency in hertz.
    pub pwm_frequency_hz: f32,
}

impl Default for TricklerConfig {
    fn default() -> Self {
        Self {
            pin: 18,
            min_percent: Percent::saturating(15),
            max_percent: Percent::FULL,
            pwm_frequency_hz: 100.0,
        }
    }
}
