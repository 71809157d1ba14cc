//! Digital output line with polarity.

use embedded_hal::digital::OutputPin;

/// A GPIO output driven by logical level.
///
/// `on()` drives the active level and `off()` the inactive one, so an
/// active-low enable input is switched the same way as an active-high
/// step input. The logical level is cached for read-back.
#[derive(Debug)]
pub struct DigitalLine<P: OutputPin> {
    pin: P,
    active_high: bool,
    is_on: bool,
}

impl<P: OutputPin> DigitalLine<P> {
    /// Wrap a pin and drive it to `initial_on`.
    ///
    /// # Errors
    ///
    /// Returns the pin's error if the initial level cannot be written.
    pub fn new(pin: P, active_high: bool, initial_on: bool) -> Result<Self, P::Error> {
        let mut line = Self {
            pin,
            active_high,
            is_on: initial_on,
        };
        line.write(initial_on)?;
        Ok(line)
    }

    /// Drive the active level.
    #[inline]
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.write(true)
    }

    /// Drive the inactive level.
    #[inline]
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.write(false)
    }

    /// Drive the given logical level.
    pub fn write(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.active_high {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.is_on = on;
        Ok(())
    }

    /// Current logical level.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether "on" is the physical high level.
    #[inline]
    pub fn is_active_high(&self) -> bool {
        self.active_high
    }

    /// Give back the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}
