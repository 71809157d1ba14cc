//! PWM output abstraction.
//!
//! embedded-hal's `SetDutyCycle` is write-only; the trickler reports its speed
//! from the hardware, so the duty cycle must also be readable.

use embedded_hal::pwm::ErrorType;

/// A PWM channel with a readable and writable duty cycle fraction.
pub trait PwmOutput: ErrorType {
    /// Set the duty cycle as a fraction, nominally in `[0, 1]`.
    ///
    /// Implementations decide what happens outside that range.
    fn set_duty(&mut self, fraction: f32) -> Result<(), Self::Error>;

    /// Read the current duty cycle fraction from the hardware.
    fn duty(&self) -> Result<f32, Self::Error>;
}

impl<T: PwmOutput + ?Sized> PwmOutput for &mut T {
    #[inline]
    fn set_duty(&mut self, fraction: f32) -> Result<(), Self::Error> {
        T::set_duty(self, fraction)
    }

    #[inline]
    fn duty(&self) -> Result<f32, Self::Error> {
        T::duty(self)
    }
}
