//! Raspberry Pi backend using `rppal`.
//!
//! Digital lines are plain GPIO outputs. The trickler uses the hardware PWM
//! peripheral, so its pin must be one routed to a PWM channel (BCM 12/18 for
//! channel 0, 13/19 for channel 1) and the matching `dtoverlay=pwm` must be
//! enabled.

use core::fmt;

use rppal::gpio::{Gpio, OutputPin};
use rppal::pwm::{Channel, Polarity, Pwm};

use crate::config::{ThrowerConfig, TricklerConfig};
use crate::error::{MotorError, Result};
use crate::motor::{ThrowerMotor, TricklerMotor};
use crate::publish::SpeedSink;

use super::delay::StdDelay;
use super::pwm::PwmOutput;

/// Thrower motor wired to Raspberry Pi GPIO.
pub type RpiThrower = ThrowerMotor<OutputPin, OutputPin, OutputPin, StdDelay>;

/// Trickler motor on a Raspberry Pi hardware PWM channel.
pub type RpiTrickler<S> = TricklerMotor<RpiPwm, S>;

/// Hardware PWM channel.
///
/// The duty cycle is read back from the PWM peripheral, not cached.
pub struct RpiPwm {
    pwm: Pwm,
}

/// Error from the PWM peripheral.
#[derive(Debug)]
pub struct RpiPwmError(pub rppal::pwm::Error);

impl fmt::Display for RpiPwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl embedded_hal::pwm::Error for RpiPwmError {
    fn kind(&self) -> embedded_hal::pwm::ErrorKind {
        embedded_hal::pwm::ErrorKind::Other
    }
}

impl embedded_hal::pwm::ErrorType for RpiPwm {
    type Error = RpiPwmError;
}

impl PwmOutput for RpiPwm {
    fn set_duty(&mut self, fraction: f32) -> core::result::Result<(), Self::Error> {
        self.pwm.set_duty_cycle(fraction as f64).map_err(RpiPwmError)
    }

    fn duty(&self) -> core::result::Result<f32, Self::Error> {
        self.pwm
            .duty_cycle()
            .map(|duty| duty as f32)
            .map_err(RpiPwmError)
    }
}

impl RpiPwm {
    /// Enable the PWM channel behind `pin` at `frequency_hz`, duty cycle 0.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinUnavailable` if the pin has no PWM channel or
    /// the channel cannot be opened.
    pub fn open(pin: u8, frequency_hz: f32) -> Result<Self> {
        let channel = pwm_channel(pin).ok_or(MotorError::PinUnavailable(pin))?;
        let pwm = Pwm::with_frequency(channel, frequency_hz as f64, 0.0, Polarity::Normal, true)
            .map_err(|_| MotorError::PinUnavailable(pin))?;
        Ok(Self { pwm })
    }
}

/// PWM channel a BCM pin is routed to, if any.
pub fn pwm_channel(pin: u8) -> Option<Channel> {
    match pin {
        12 | 18 => Some(Channel::Pwm0),
        13 | 19 => Some(Channel::Pwm1),
        _ => None,
    }
}

fn output_pin(gpio: &Gpio, pin: u8, active_high: bool) -> Result<OutputPin> {
    let pin_handle = gpio.get(pin).map_err(|_| MotorError::PinUnavailable(pin))?;
    // Start at the inactive level so an active-low enable does not energize
    // the coils before the driver takes over.
    Ok(if active_high {
        pin_handle.into_output_low()
    } else {
        pin_handle.into_output_high()
    })
}

/// Open the thrower's three GPIO lines and build the motor.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a pin is unavailable.
pub fn open_thrower(gpio: &Gpio, config: &ThrowerConfig) -> Result<RpiThrower> {
    crate::config::validate_thrower(config)?;
    let dir = output_pin(gpio, config.dir_pin, true)?;
    let step = output_pin(gpio, config.step_pin, true)?;
    let enable = output_pin(gpio, config.enable_pin, !config.enable_active_low)?;

    ThrowerMotor::from_config(dir, step, enable, StdDelay::new(), config)
}

/// Open the trickler's PWM channel and build the motor.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the PWM channel is
/// unavailable.
pub fn open_trickler<S: SpeedSink>(config: &TricklerConfig, sink: S) -> Result<RpiTrickler<S>> {
    crate::config::validate_trickler(config)?;
    let pwm = RpiPwm::open(config.pin, config.pwm_frequency_hz)?;

    TricklerMotor::from_config(pwm, sink, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwm_channel_mapping() {
        assert_eq!(pwm_channel(18), Some(Channel::Pwm0));
        assert_eq!(pwm_channel(12), Some(Channel::Pwm0));
        assert_eq!(pwm_channel(13), Some(Channel::Pwm1));
        assert_eq!(pwm_channel(19), Some(Channel::Pwm1));
        assert_eq!(pwm_channel(6), None);
    }
}
