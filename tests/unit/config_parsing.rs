//! Unit tests for TOML configuration parsing.

use trickler_motors::config::{parse_config, MotorsConfig, PulseTiming};
use trickler_motors::error::{ConfigError, Error};

/// Test parsing the thrower section from TOML.
#[test]
fn test_parse_thrower_config() {
    let toml_str = r#"
[thrower]
dir_pin = 6
step_pin = 12
enable_pin = 13
step_count = 180
enable_active_low = true
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.thrower.dir_pin, 6);
    assert_eq!(config.thrower.step_pin, 12);
    assert_eq!(config.thrower.enable_pin, 13);
    assert_eq!(config.thrower.step_count, 180);
    assert!(config.thrower.enable_active_low);
    assert_eq!(config.thrower.timing, PulseTiming::DEFAULT);
}

/// Test that a partial timing table keeps the other defaults.
#[test]
fn test_parse_partial_timing() {
    let toml_str = r#"
[thrower.timing]
settle_ms = 750
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let timing = config.thrower.timing;

    assert_eq!(timing.pulse_high.value(), 100);
    assert_eq!(timing.pulse_low.value(), 2000);
    assert_eq!(timing.settle.value(), 750);
}

/// Test parsing the trickler section from TOML.
#[test]
fn test_parse_trickler_config() {
    let toml_str = r#"
[trickler]
pin = 19
min_percent = 10
max_percent = 80
pwm_frequency_hz = 500.0
"#;

    let config: MotorsConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.trickler.pin, 19);
    assert_eq!(config.trickler.min_percent.value(), 10);
    assert_eq!(config.trickler.max_percent.value(), 80);
    assert_eq!(config.trickler.pwm_frequency_hz, 500.0);
    // thrower untouched
    assert_eq!(config.thrower, MotorsConfig::default().thrower);
}

/// Test the wiring used when no file is given.
#[test]
fn test_default_wiring() {
    let config = MotorsConfig::default();

    assert_eq!(
        config.pin_assignments(),
        [
            ("thrower.dir_pin", 6),
            ("thrower.step_pin", 12),
            ("thrower.enable_pin", 13),
            ("trickler.pin", 18),
        ]
    );
    assert_eq!(config.trickler.min_percent.value(), 15);
    assert_eq!(config.trickler.max_percent.value(), 100);
}

/// Test that a throw with default timing takes about 2.76 seconds.
#[test]
fn test_default_throw_duration() {
    let duration = PulseTiming::DEFAULT.throw_duration(180);
    assert_eq!(duration.as_millis(), 2756);
}

/// Test that malformed TOML is reported as a parse error.
#[test]
fn test_parse_malformed_toml() {
    let result = parse_config("[thrower\nstep_count = 1");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that a wrongly typed field is reported as a parse error.
#[test]
fn test_parse_wrong_type() {
    let toml_str = r#"
[trickler]
min_percent = "fast"
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test that negative pins are rejected by the parser.
#[test]
fn test_parse_negative_pin() {
    let toml_str = r#"
[trickler]
pin = -1
"#;

    assert!(parse_config(toml_str).is_err());
}
