//! Motor module for trickler-motors.
//!
//! Provides the thrower stepper driver and the trickler vibration motor driver.
//! Both own their lines and release them when closed or dropped.

mod thrower;
mod trickler;

pub use thrower::ThrowerMotor;
pub use trickler::TricklerMotor;
