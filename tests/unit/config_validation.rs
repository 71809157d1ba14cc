//! Unit tests for configuration validation.

use trickler_motors::config::{validate_config, Milliseconds, MotorsConfig, Percent};
use trickler_motors::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[thrower]
dir_pin = 5
step_pin = 23
enable_pin = 24

[trickler]
pin = 12
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when the trickler shares a thrower pin.
#[test]
fn test_trickler_pin_collides_with_thrower() {
    let toml_str = r#"
[trickler]
pin = 13
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::DuplicatePin(13)))
    ));
}

/// Test validation fails when two thrower lines share a pin.
#[test]
fn test_thrower_pins_collide() {
    let mut config = MotorsConfig::default();
    config.thrower.dir_pin = 7;
    config.thrower.enable_pin = 7;

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::DuplicatePin(7)))
    );
}

/// Test validation fails for a zero step count.
#[test]
fn test_zero_step_count() {
    let toml_str = r#"
[thrower]
step_count = 0
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepCount(0)))
    ));
}

/// Test validation fails for a zero-width step pulse.
#[test]
fn test_zero_pulse_high() {
    let toml_str = r#"
[thrower.timing]
pulse_high_us = 0
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTiming(_)))
    ));
}

/// Test that a zero settle time is allowed.
#[test]
fn test_zero_settle_allowed() {
    let mut config = MotorsConfig::default();
    config.thrower.timing.settle = Milliseconds(0);

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails when the clamp range is inverted.
#[test]
fn test_inverted_clamp_range() {
    let toml_str = r#"
[trickler]
min_percent = 70
max_percent = 30
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPercentRange { min: 70, max: 30 }))
    );
}

/// Test that an empty clamp range (min == max) is allowed.
#[test]
fn test_single_point_clamp_range() {
    let mut config = MotorsConfig::default();
    config.trickler.min_percent = Percent::new(40).unwrap();
    config.trickler.max_percent = Percent::new(40).unwrap();

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a non-positive PWM frequency.
#[test]
fn test_non_positive_frequency() {
    let mut config = MotorsConfig::default();

    config.trickler.pwm_frequency_hz = 0.0;
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTiming(_)))
    ));

    config.trickler.pwm_frequency_hz = -50.0;
    assert!(validate_config(&config).is_err());
}
