//! Configuration module for trickler-motors.
//!
//! Provides types for loading and validating motor wiring and timing
//! from TOML files (with `std` feature) or pre-parsed data.

mod system;
mod thrower;
mod timing;
mod trickler;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use system::MotorsConfig;
pub use thrower::ThrowerConfig;
pub use timing::PulseTiming;
pub use trickler::TricklerConfig;
pub use validation::validate_config;
pub(crate) use validation::{validate_thrower, validate_trickler};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Milliseconds, Percent};
