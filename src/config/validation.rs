//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorsConfig, ThrowerConfig, TricklerConfig};

/// Validate a motors configuration.
///
/// Checks:
/// - Thrower step count and pulse timing are non-zero
/// - Trickler clamp range is ordered and PWM frequency is positive
/// - No pin is assigned to more than one line
pub fn validate_config(config: &MotorsConfig) -> Result<()> {
    validate_thrower(&config.thrower)?;
    validate_trickler(&config.trickler)?;

    let pins = config.pin_assignments();
    for (i, (_, pin)) in pins.iter().enumerate() {
        if pins[i + 1..].iter().any(|(_, other)| other == pin) {
            return Err(Error::Config(ConfigError::DuplicatePin(*pin)));
        }
    }

    Ok(())
}

pub(crate) fn validate_thrower(config: &ThrowerConfig) -> Result<()> {
    if config.step_count == 0 {
        return Err(Error::Config(ConfigError::InvalidStepCount(config.step_count)));
    }

    if config.timing.pulse_high.value() == 0 {
        return Err(timing_error("pulse_high_us must be > 0"));
    }

    if config.timing.pulse_low.value() == 0 {
        return Err(timing_error("pulse_low_us must be > 0"));
    }

    Ok(())
}

pub(crate) fn validate_trickler(config: &TricklerConfig) -> Result<()> {
    if config.min_percent > config.max_percent {
        return Err(Error::Config(ConfigError::InvalidPercentRange {
            min: config.min_percent.value(),
            max: config.max_percent.value(),
        }));
    }

    if config.pwm_frequency_hz.is_nan() || config.pwm_frequency_hz <= 0.0 {
        return Err(timing_error("pwm_frequency_hz must be > 0"));
    }

    Ok(())
}

fn timing_error(msg: &str) -> Error {
    Error::Config(ConfigError::InvalidTiming(
        heapless::String::try_from(msg).unwrap_or_default(),
    ))
}
