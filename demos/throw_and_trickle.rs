//! Throw-and-trickle example.
//!
//! Builds both motors from a TOML configuration, throws a charge and steps the
//! trickler through a few speeds, printing every pin change.
//!
//! Uses in-memory pins so it runs without real hardware.

use std::cell::RefCell;
use std::rc::Rc;

use trickler_motors::{
    parse_config, Percent, PwmOutput, SharedSpeed, SpeedRamp, ThrowerMotor, TricklerMotor,
};

/// Delay that only accumulates the requested time.
#[derive(Default)]
struct CountingDelay {
    total_ns: Rc<RefCell<u64>>,
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += ns as u64;
    }
}

/// Output pin that counts rising edges.
struct CountingPin {
    name: &'static str,
    high: bool,
    rising_edges: Rc<RefCell<u32>>,
}

impl CountingPin {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            high: false,
            rising_edges: Rc::new(RefCell::new(0)),
        }
    }
}

impl embedded_hal::digital::ErrorType for CountingPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for CountingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            *self.rising_edges.borrow_mut() += 1;
        }
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }
}

/// PWM channel kept in memory.
struct MemoryPwm {
    duty: f32,
}

impl embedded_hal::pwm::ErrorType for MemoryPwm {
    type Error = core::convert::Infallible;
}

impl PwmOutput for MemoryPwm {
    fn set_duty(&mut self, fraction: f32) -> Result<(), Self::Error> {
        self.duty = fraction;
        Ok(())
    }

    fn duty(&self) -> Result<f32, Self::Error> {
        Ok(self.duty)
    }
}

const CONFIG: &str = r#"
[thrower]
step_count = 20

[thrower.timing]
settle_ms = 250

[trickler]
min_percent = 15
max_percent = 90
"#;

fn main() -> trickler_motors::Result<()> {
    println!("=== Throw and Trickle Example ===\n");

    let config = parse_config(CONFIG)?;
    println!(
        "Thrower pins dir={} step={} enable={}, {} steps per half-cycle",
        config.thrower.dir_pin,
        config.thrower.step_pin,
        config.thrower.enable_pin,
        config.thrower.step_count
    );

    let step = CountingPin::new("step");
    let step_edges = step.rising_edges.clone();
    let delay = CountingDelay::default();
    let waited = delay.total_ns.clone();

    let mut thrower = ThrowerMotor::from_config(
        CountingPin::new("dir"),
        step,
        CountingPin::new("enable"),
        delay,
        &config.thrower,
    )?;

    thrower.throw_charge()?;
    println!("\n=== Throw ===");
    println!("Step pulses: {}", step_edges.borrow());
    println!("Simulated time: {:.3} s", *waited.borrow() as f64 / 1e9);
    println!(
        "Expected time: {:.3} s",
        thrower
            .timing()
            .throw_duration(thrower.step_count())
            .as_secs_f64()
    );
    println!("Final direction: {:?}", thrower.direction()?);
    println!("Coils energized: {}", thrower.is_enabled()?);

    let (dir, _, _, _) = thrower.release()?;
    println!("Released {} pin back to caller", dir.name);

    println!("\n=== Trickle ===");
    let speed = SharedSpeed::new();
    let mut trickler =
        TricklerMotor::from_config(MemoryPwm { duty: 0.0 }, speed.clone(), &config.trickler)?;

    for target in [0, 40, 150] {
        trickler.update_percent(target)?;
        println!(
            "update_percent({:>3}) -> speed {:.2}, published {:?}",
            target,
            trickler.speed()?,
            speed.trickler_speed()
        );
    }

    let ramp = SpeedRamp::new(Percent::new(10)?, Percent::new(12)?);
    for percent in ramp {
        trickler.set_speed(percent.fraction())?;
    }
    trickler.off()?;
    println!("After ramp and off: speed {:.2}", trickler.speed()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
