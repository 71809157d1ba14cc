//! Trickler vibration motor driver.
//!
//! A small DC motor on a PWM line. Speed can be set two ways:
//! [`update_percent`](TricklerMotor::update_percent) clamps an integer percent
//! into the configured range, while [`set_speed`](TricklerMotor::set_speed)
//! writes a raw fraction and bypasses the clamps.

use crate::config::units::Percent;
use crate::config::TricklerConfig;
use crate::error::{ConfigError, Error, MotorError, Result};
use crate::hal::PwmOutput;
use crate::publish::{SpeedSink, TRICKLER_MOTOR_SPEED};

/// PWM line and speed sink owned by a live trickler.
struct TricklerParts<PWM, SINK> {
    pwm: PWM,
    sink: SINK,
}

/// Vibration motor that trickles powder onto the scale.
///
/// Generic over:
/// - `PWM`: PWM channel with readable duty cycle
/// - `SINK`: receiver of published speed changes
///
/// Dropping the motor stops it and releases the PWM line.
pub struct TricklerMotor<PWM, SINK>
where
    PWM: PwmOutput,
    SINK: SpeedSink,
{
    /// `None` once released; taken exactly once.
    parts: Option<TricklerParts<PWM, SINK>>,

    /// Lowest percent `update_percent` applies.
    min_percent: Percent,

    /// Highest percent `update_percent` applies.
    max_percent: Percent,
}

impl<PWM, SINK> TricklerMotor<PWM, SINK>
where
    PWM: PwmOutput,
    SINK: SpeedSink,
{
    /// Take ownership of the PWM line, stop it, and store the clamp range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPercentRange` if `min_percent` exceeds
    /// `max_percent`, or `MotorError::PwmError` if the duty cycle cannot be
    /// zeroed.
    pub fn new(
        mut pwm: PWM,
        sink: SINK,
        min_percent: Percent,
        max_percent: Percent,
    ) -> Result<Self> {
        if min_percent > max_percent {
            return Err(Error::Config(ConfigError::InvalidPercentRange {
                min: min_percent.value(),
                max: max_percent.value(),
            }));
        }

        pwm.set_duty(0.0).map_err(|_| MotorError::PwmError)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "created trickler motor with min {} and max {}",
            min_percent,
            max_percent
        );

        Ok(Self {
            parts: Some(TricklerParts { pwm, sink }),
            min_percent,
            max_percent,
        })
    }

    /// Build from a [`TricklerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the PWM write fails.
    pub fn from_config(pwm: PWM, sink: SINK, config: &TricklerConfig) -> Result<Self> {
        crate::config::validate_trickler(config)?;
        Self::new(pwm, sink, config.min_percent, config.max_percent)
    }

    /// Lowest percent `update_percent` applies.
    #[inline]
    pub fn min_percent(&self) -> Percent {
        self.min_percent
    }

    /// Highest percent `update_percent` applies.
    #[inline]
    pub fn max_percent(&self) -> Percent {
        self.max_percent
    }

    /// Whether the PWM line has been released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.parts.is_none()
    }

    /// Clamp a target percent into `[min_percent, max_percent]`.
    #[inline]
    pub fn clamp_percent(&self, target: i32) -> Percent {
        Percent::clamp_between(target, self.min_percent, self.max_percent)
    }

    /// Set the speed from an integer percent, enforcing the clamps.
    ///
    /// # Errors
    ///
    /// See [`set_speed`](Self::set_speed).
    pub fn update_percent(&mut self, target: i32) -> Result<()> {
        let clamped = self.clamp_percent(target);

        #[cfg(feature = "defmt")]
        defmt::debug!("updating target percent {} clamped to {}", target, clamped);

        self.set_speed(clamped.fraction())
    }

    /// Set the duty cycle fraction directly, bypassing the clamps.
    ///
    /// The value is not checked against `[0, 1]`; what happens outside that
    /// range is up to the PWM backend. The speed read back from the hardware
    /// is published under [`TRICKLER_MOTOR_SPEED`].
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` after [`close`](Self::close), or
    /// `MotorError::PwmError` if the duty cycle cannot be written or read.
    pub fn set_speed(&mut self, fraction: f32) -> Result<()> {
        let parts = self.parts.as_mut().ok_or(MotorError::Released)?;

        #[cfg(feature = "defmt")]
        {
            if let Ok(previous) = parts.pwm.duty() {
                defmt::debug!("setting speed from {} to {}", previous, fraction);
            }
        }

        parts.pwm.set_duty(fraction).map_err(|_| MotorError::PwmError)?;
        let speed = parts.pwm.duty().map_err(|_| MotorError::PwmError)?;
        parts.sink.publish(TRICKLER_MOTOR_SPEED, speed);

        Ok(())
    }

    /// Stop the motor.
    ///
    /// # Errors
    ///
    /// See [`set_speed`](Self::set_speed).
    pub fn off(&mut self) -> Result<()> {
        self.set_speed(0.0)
    }

    /// Current duty cycle fraction, read from the hardware.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` after [`close`](Self::close), or
    /// `MotorError::PwmError` if the duty cycle cannot be read.
    pub fn speed(&self) -> Result<f32> {
        let parts = self.parts.as_ref().ok_or(MotorError::Released)?;
        parts.pwm.duty().map_err(|_| Error::Motor(MotorError::PwmError))
    }

    /// Stop the motor and release the PWM line.
    ///
    /// Only the first call touches the hardware; later calls return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PwmError` if the duty cycle could not be zeroed.
    pub fn close(&mut self) -> Result<()> {
        match self.parts.take() {
            Some(parts) => parts.shutdown().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Stop the motor and hand back the PWM line and sink.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` if already closed, or
    /// `MotorError::PwmError` if the duty cycle could not be zeroed.
    pub fn release(mut self) -> Result<(PWM, SINK)> {
        let parts = self.parts.take().ok_or(MotorError::Released)?;
        parts.shutdown()
    }
}

impl<PWM, SINK> TricklerParts<PWM, SINK>
where
    PWM: PwmOutput,
    SINK: SpeedSink,
{
    fn shutdown(mut self) -> Result<(PWM, SINK)> {
        #[cfg(feature = "defmt")]
        defmt::debug!("closing trickler motor");

        self.pwm.set_duty(0.0).map_err(|_| MotorError::PwmError)?;
        Ok((self.pwm, self.sink))
    }
}

impl<PWM, SINK> Drop for TricklerMotor<PWM, SINK>
where
    PWM: PwmOutput,
    SINK: SpeedSink,
{
    fn drop(&mut self) {
        let _ = self.close();
    }
}
