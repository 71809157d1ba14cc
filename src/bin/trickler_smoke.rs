//! Hardware smoke test for the trickler and thrower motors.
//!
//! Spins the trickler from 1 % up to 100 % and back down, then stops it.
//! With `--throw`, also throws one charge with the thrower.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rppal::gpio::Gpio;

use trickler_motors::hal::rpi;
use trickler_motors::{load_config, MotorsConfig, Percent, SharedSpeed, SpeedRamp};

const SPIN_UP_DELAY: Duration = Duration::from_secs(3);
const RAMP_STEP_DELAY: Duration = Duration::from_millis(50);

/// Exercise the trickler and thrower motors on a Raspberry Pi
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file with motor wiring; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// BCM pin of the trickler PWM line
    #[arg(long)]
    trickler_motor_pin: Option<u8>,

    /// Upper clamp for percent updates
    #[arg(long)]
    max_pwm: Option<u8>,

    /// Lower clamp for percent updates
    #[arg(long)]
    min_pwm: Option<u8>,

    /// BCM pin of the thrower direction line
    #[arg(long)]
    thrower_dir_pin: Option<u8>,

    /// BCM pin of the thrower step line
    #[arg(long)]
    thrower_step_pin: Option<u8>,

    /// BCM pin of the thrower enable line
    #[arg(long)]
    thrower_enable_pin: Option<u8>,

    /// Steps per half-cycle of a throw
    #[arg(long)]
    thrower_step_count: Option<u32>,

    /// Also throw one charge after the trickler ramp
    #[arg(long)]
    throw: bool,
}

impl Args {
    fn motors_config(&self) -> anyhow::Result<MotorsConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MotorsConfig::default(),
        };

        if let Some(pin) = self.trickler_motor_pin {
            config.trickler.pin = pin;
        }
        if let Some(max) = self.max_pwm {
            config.trickler.max_percent = Percent::new(max).context("--max-pwm")?;
        }
        if let Some(min) = self.min_pwm {
            config.trickler.min_percent = Percent::new(min).context("--min-pwm")?;
        }
        if let Some(pin) = self.thrower_dir_pin {
            config.thrower.dir_pin = pin;
        }
        if let Some(pin) = self.thrower_step_pin {
            config.thrower.step_pin = pin;
        }
        if let Some(pin) = self.thrower_enable_pin {
            config.thrower.enable_pin = pin;
        }
        if let Some(count) = self.thrower_step_count {
            config.thrower.step_count = count;
        }

        trickler_motors::validate_config(&config)?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.motors_config()?;

    let speed = SharedSpeed::new();
    let mut trickler = rpi::open_trickler(&config.trickler, speed.clone())
        .with_context(|| format!("opening trickler on pin {}", config.trickler.pin))?;

    println!("Spinning up trickler motor in 3 seconds...");
    thread::sleep(SPIN_UP_DELAY);
    for percent in SpeedRamp::full() {
        trickler.set_speed(percent.fraction())?;
        thread::sleep(RAMP_STEP_DELAY);
    }
    trickler.off()?;
    println!(
        "Trickler stopped, published speed {:?}",
        speed.trickler_speed()
    );

    if args.throw {
        let gpio = Gpio::new().context("opening GPIO")?;
        let mut thrower = rpi::open_thrower(&gpio, &config.thrower)
            .context("opening thrower pins")?;
        println!(
            "Throwing charge ({} steps, ~{:.2}s)...",
            thrower.step_count(),
            thrower
                .timing()
                .throw_duration(thrower.step_count())
                .as_secs_f32()
        );
        thrower.throw_charge()?;
        thrower.close()?;
    }

    trickler.close()?;
    println!("Done.");
    Ok(())
}
