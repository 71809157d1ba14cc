//! Unit types for motor settings.
//!
//! Percent values are validated at construction so a clamp range loaded from
//! configuration can never exceed 100.

use core::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Motor speed as an integer percent (0 to 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u8);

impl Percent {
    /// Motor stopped.
    pub const ZERO: Self = Self(0);
    /// Full duty cycle.
    pub const FULL: Self = Self(100);

    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPercent` if the value is above 100.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidPercent(value))
        }
    }

    /// Create a Percent, capping values above 100.
    #[inline]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Get the raw percent value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Convert to a duty cycle fraction (`percent / 100`).
    #[inline]
    pub fn fraction(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Clamp a signed target into `[min, max]`.
    ///
    /// `min` must not exceed `max`.
    #[inline]
    pub fn clamp_between(target: i32, min: Self, max: Self) -> Self {
        Self(target.clamp(min.0 as i32, max.0 as i32) as u8)
    }
}

impl TryFrom<u8> for Percent {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        Percent::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Time span in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to a `Duration`.
    #[inline]
    pub const fn as_duration(self) -> Duration {
        Duration::from_micros(self.0 as u64)
    }
}

/// Time span in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Milliseconds(pub u32);

impl Milliseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Convert to a `Duration`.
    #[inline]
    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.0 as u64)
    }
}
