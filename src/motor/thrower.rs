//! Thrower stepper motor driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types. The throw is a fixed
//! open-loop sequence: fill rotation, de-energized settle, return rotation.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{PulseTiming, ThrowerConfig};
use crate::error::{ConfigError, Error, MotorError, Result};
use crate::hal::DigitalLine;
use crate::motion::Direction;
#[cfg(feature = "defmt")]
use crate::motion::ThrowPhase;

/// Lines and delay owned by a live thrower.
struct ThrowerLines<DIR, STEP, EN, DELAY>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    dir: DigitalLine<DIR>,
    step: DigitalLine<STEP>,
    enable: DigitalLine<EN>,
    delay: DELAY,
}

/// Stepper motor that rotates the powder drum.
///
/// Generic over:
/// - `DIR`: direction pin (on = clockwise)
/// - `STEP`: step pin (one pulse per step)
/// - `EN`: enable pin (on = coils energized)
/// - `DELAY`: delay provider for pulse timing
///
/// Dropping the motor de-energizes and releases all three lines.
pub struct ThrowerMotor<DIR, STEP, EN, DELAY>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// `None` once released; taken exactly once.
    lines: Option<ThrowerLines<DIR, STEP, EN, DELAY>>,

    /// Steps per half-cycle.
    step_count: u32,

    /// Pulse and settle timing.
    timing: PulseTiming,
}

impl<DIR, STEP, EN, DELAY> ThrowerMotor<DIR, STEP, EN, DELAY>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Take ownership of the pins and drive them to their idle levels.
    ///
    /// Direction and step are active-high; `enable_active_low` selects the
    /// enable polarity. All three lines start logically off.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepCount` for a zero step count and
    /// `MotorError::PinError` if an initial level cannot be written. Lines
    /// already wrapped are released with the failed motor.
    pub fn new(
        dir: DIR,
        step: STEP,
        enable: EN,
        delay: DELAY,
        step_count: u32,
        enable_active_low: bool,
        timing: PulseTiming,
    ) -> Result<Self> {
        if step_count == 0 {
            return Err(Error::Config(ConfigError::InvalidStepCount(step_count)));
        }

        let dir = DigitalLine::new(dir, true, false).map_err(|_| MotorError::PinError)?;
        let step = DigitalLine::new(step, true, false).map_err(|_| MotorError::PinError)?;
        let enable = DigitalLine::new(enable, !enable_active_low, false)
            .map_err(|_| MotorError::PinError)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "created thrower motor: step count {}, timing {}",
            step_count,
            timing
        );

        Ok(Self {
            lines: Some(ThrowerLines {
                dir,
                step,
                enable,
                delay,
            }),
            step_count,
            timing,
        })
    }

    /// Build from a [`ThrowerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a pin write fails.
    pub fn from_config(
        dir: DIR,
        step: STEP,
        enable: EN,
        delay: DELAY,
        config: &ThrowerConfig,
    ) -> Result<Self> {
        crate::config::validate_thrower(config)?;
        Self::new(
            dir,
            step,
            enable,
            delay,
            config.step_count,
            config.enable_active_low,
            config.timing,
        )
    }

    /// Steps per half-cycle.
    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Pulse and settle timing.
    #[inline]
    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// Whether the lines have been released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.lines.is_none()
    }

    /// Direction currently selected on the direction line.
    pub fn direction(&self) -> Result<Direction> {
        let lines = self.lines.as_ref().ok_or(MotorError::Released)?;
        Ok(Direction::from_line(lines.dir.is_on()))
    }

    /// Whether the coils are energized.
    pub fn is_enabled(&self) -> Result<bool> {
        let lines = self.lines.as_ref().ok_or(MotorError::Released)?;
        Ok(lines.enable.is_on())
    }

    /// Throw one charge: fill rotation, settle, return rotation.
    ///
    /// Blocks for [`PulseTiming::throw_duration`] and cannot be interrupted.
    /// A pin failure aborts the sequence and leaves the lines where they were.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` after [`close`](Self::close), or
    /// `MotorError::PinError` if a line cannot be driven.
    pub fn throw_charge(&mut self) -> Result<()> {
        let step_count = self.step_count;
        let timing = self.timing;
        let lines = self.lines.as_mut().ok_or(MotorError::Released)?;

        #[cfg(feature = "defmt")]
        defmt::info!("throwing charge");

        #[cfg(feature = "defmt")]
        defmt::debug!("throw phase {}", ThrowPhase::Fill);
        let fill = Direction::Clockwise;
        lines.rotate(fill, step_count, &timing)?;

        // Quiets the motor hum while the drum is full.
        lines.enable.off().map_err(|_| MotorError::PinError)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("throw phase {}", ThrowPhase::Settle);
        lines.delay.delay_ms(timing.settle.value());

        #[cfg(feature = "defmt")]
        defmt::debug!("throw phase {}", ThrowPhase::Return);
        lines.rotate(fill.reversed(), step_count, &timing)?;
        lines.enable.off().map_err(|_| MotorError::PinError)?;

        Ok(())
    }

    /// Drive direction and step off. The enable line is left as is.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` after [`close`](Self::close), or
    /// `MotorError::PinError` if a line cannot be driven.
    pub fn off(&mut self) -> Result<()> {
        let lines = self.lines.as_mut().ok_or(MotorError::Released)?;
        lines.dir.off().map_err(|_| MotorError::PinError)?;
        lines.step.off().map_err(|_| MotorError::PinError)?;
        Ok(())
    }

    /// De-energize all three lines and release them.
    ///
    /// Only the first call touches the hardware; later calls return `Ok(())`.
    /// The lines are released even if driving them off fails.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a line could not be driven off.
    pub fn close(&mut self) -> Result<()> {
        match self.lines.take() {
            Some(lines) => lines.shutdown().map(|_| ()),
            None => Ok(()),
        }
    }

    /// De-energize all three lines and hand back the pins and delay.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::Released` if already closed, or
    /// `MotorError::PinError` if a line could not be driven off (the pins
    /// are dropped in that case).
    pub fn release(mut self) -> Result<(DIR, STEP, EN, DELAY)> {
        let lines = self.lines.take().ok_or(MotorError::Released)?;
        lines.shutdown()
    }
}

impl<DIR, STEP, EN, DELAY> ThrowerLines<DIR, STEP, EN, DELAY>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Energize, select `direction` and emit `step_count` pulses.
    fn rotate(&mut self, direction: Direction, step_count: u32, timing: &PulseTiming) -> Result<()> {
        #[cfg(feature = "defmt")]
        defmt::debug!("rotating {} steps {}", step_count, direction);

        self.enable.on().map_err(|_| MotorError::PinError)?;
        self.dir
            .write(direction.line_level())
            .map_err(|_| MotorError::PinError)?;

        for _ in 0..step_count {
            self.step.on().map_err(|_| MotorError::PinError)?;
            self.delay.delay_us(timing.pulse_high.value());
            self.step.off().map_err(|_| MotorError::PinError)?;
            self.delay.delay_us(timing.pulse_low.value());
        }

        Ok(())
    }

    /// Drive every line off, then give the pins back.
    fn shutdown(mut self) -> Result<(DIR, STEP, EN, DELAY)> {
        #[cfg(feature = "defmt")]
        defmt::debug!("closing thrower motor");

        // Attempt all three even if one fails.
        let dir = self.dir.off();
        let step = self.step.off();
        let enable = self.enable.off();
        if dir.is_err() || step.is_err() || enable.is_err() {
            return Err(Error::Motor(MotorError::PinError));
        }

        Ok((
            self.dir.into_inner(),
            self.step.into_inner(),
            self.enable.into_inner(),
            self.delay,
        ))
    }
}

impl<DIR, STEP, EN, DELAY> Drop for ThrowerMotor<DIR, STEP, EN, DELAY>
where
    DIR: OutputPin,
    STEP: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn drop(&mut self) {
        // Nothing useful to do with a failure during drop.
        let _ = self.close();
    }
}
