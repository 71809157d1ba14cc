//! # trickler-motors
//!
//! Motor drivers for an automated powder trickler, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Thrower**: stepper that rotates the powder drum forward and back in a
//!   fixed open-loop sequence (`OutputPin` for DIR/STEP/EN, `DelayNs` for timing)
//! - **Trickler**: PWM vibration motor with clamped percent and raw fraction setters
//! - **Speed publication**: every trickler speed change is reported to a `SpeedSink`
//! - **Scoped ownership**: lines are released exactly once, on `close()` or drop
//! - **Configuration-driven**: pins, clamps and timing from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trickler_motors::{load_config, SharedSpeed, ThrowerMotor, TricklerMotor};
//!
//! let config = load_config("motors.toml")?;
//!
//! let mut thrower = ThrowerMotor::from_config(dir, step, enable, delay, &config.thrower)?;
//! thrower.throw_charge()?;
//!
//! let speed = SharedSpeed::new();
//! let mut trickler = TricklerMotor::from_config(pwm, speed.clone(), &config.trickler)?;
//! trickler.update_percent(40)?;
//! assert_eq!(speed.trickler_speed(), Some(0.4));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, `StdDelay` and `SharedSpeed`
//! - `defmt`: Enables defmt logging for embedded targets
//! - `rpi`: Raspberry Pi backend (`rppal`) and the `trickler-smoke` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// Core modules
pub mod config;
pub mod error;
pub mod hal;
pub mod motion;
pub mod motor;
pub mod publish;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorsConfig, PulseTiming, ThrowerConfig, TricklerConfig};
pub use error::{Error, Result};
pub use hal::{DigitalLine, PwmOutput};
pub use motion::{Direction, SpeedRamp, ThrowPhase};
pub use motor::{ThrowerMotor, TricklerMotor};
pub use publish::{NoopSink, SpeedSink, TRICKLER_MOTOR_SPEED};

// Configuration loading and host helpers (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
#[cfg(feature = "std")]
pub use hal::StdDelay;
#[cfg(feature = "std")]
pub use publish::SharedSpeed;

// Unit types
pub use config::units::{Microseconds, Milliseconds, Percent};
