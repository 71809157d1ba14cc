//! Speed publication side-channel.
//!
//! The trickler reports every speed change to a [`SpeedSink`] so other parts
//! of the system can observe the motor without owning it. Publishing is
//! fire-and-forget: a sink cannot fail the motor operation that fed it.

/// Key under which the trickler motor speed is published.
pub const TRICKLER_MOTOR_SPEED: &str = "trickler_motor_speed";

/// Receiver of published motor speeds.
pub trait SpeedSink {
    /// Record `value` under `key`.
    fn publish(&mut self, key: &str, value: f32);
}

impl<T: SpeedSink + ?Sized> SpeedSink for &mut T {
    #[inline]
    fn publish(&mut self, key: &str, value: f32) {
        T::publish(self, key, value)
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SpeedSink for NoopSink {
    #[inline]
    fn publish(&mut self, _key: &str, _value: f32) {}
}

#[cfg(feature = "std")]
pub use shared::SharedSpeed;

#[cfg(feature = "std")]
mod shared {
    use std::collections::HashMap;
    use std::string::String;
    use std::sync::{Arc, Mutex, PoisonError};

    use super::{SpeedSink, TRICKLER_MOTOR_SPEED};

    /// Thread-safe key/value cache shared between clones.
    ///
    /// Hand one clone to the motor and keep another to read the latest speed.
    #[derive(Debug, Clone, Default)]
    pub struct SharedSpeed {
        values: Arc<Mutex<HashMap<String, f32>>>,
    }

    impl SharedSpeed {
        /// Create an empty cache.
        pub fn new() -> Self {
            Self::default()
        }

        /// Latest value published under `key`.
        pub fn get(&self, key: &str) -> Option<f32> {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .copied()
        }

        /// Latest published trickler speed.
        pub fn trickler_speed(&self) -> Option<f32> {
            self.get(TRICKLER_MOTOR_SPEED)
        }
    }

    impl SpeedSink for SharedSpeed {
        fn publish(&mut self, key: &str, value: f32) {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(String::from(key), value);
        }
    }
}
