//! Hardware access layer.
//!
//! Drivers are generic over embedded-hal 1.0 `OutputPin` and `DelayNs` plus
//! the crate's readable [`PwmOutput`]. Concrete backends live behind features.

#[cfg(feature = "std")]
mod delay;
mod line;
mod pwm;
#[cfg(feature = "rpi")]
pub mod rpi;

#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use line::DigitalLine;
pub use pwm::PwmOutput;
