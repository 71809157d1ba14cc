//! Error types for trickler-motors.
//!
//! Provides unified error handling across configuration and motor control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all trickler-motors operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Thrower step count must be at least 1
    InvalidStepCount(u32),
    /// Percent value above 100
    InvalidPercent(u8),
    /// Percent clamp range is inverted
    InvalidPercentRange {
        /// Lower clamp
        min: u8,
        /// Upper clamp
        max: u8,
    },
    /// The same BCM pin is assigned to more than one line
    DuplicatePin(u8),
    /// Pulse or settle timing of zero, or a non-positive PWM frequency
    InvalidTiming(heapless::String<64>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Digital pin operation failed
    PinError,
    /// PWM duty cycle could not be written or read
    PwmError,
    /// The motor's lines have already been released
    Released,
    /// The pin could not be acquired, or has no PWM channel
    PinUnavailable(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepCount(v) => {
                write!(f, "Invalid step count: {}. Must be > 0", v)
            }
            ConfigError::InvalidPercent(v) => write!(f, "Invalid percent: {}. Must be 0-100", v),
            ConfigError::InvalidPercentRange { min, max } => {
                write!(f, "Invalid percent range: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is assigned more than once", pin),
            ConfigError::InvalidTiming(msg) => write!(f, "Invalid timing: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PwmError => write!(f, "PWM operation failed"),
            MotorError::Released => write!(f, "Motor lines already released"),
            MotorError::PinUnavailable(pin) => write!(f, "Pin {} is unavailable", pin),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
