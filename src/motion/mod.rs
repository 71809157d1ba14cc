//! Motion module for trickler-motors.
//!
//! Open-loop only: rotation direction and throw phases for the thrower, and
//! the speed ramp used to exercise the trickler.

mod phase;
mod ramp;

pub use phase::{Direction, ThrowPhase};
pub use ramp::SpeedRamp;
