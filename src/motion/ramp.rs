//! Speed ramp used to exercise the trickler motor.

use crate::config::units::Percent;

/// Triangle ramp of percents: `low..=high` then `high..=low`, 1 % per step.
///
/// The peak is yielded twice, once at the end of the climb and once at the
/// start of the descent.
#[derive(Debug, Clone)]
pub struct SpeedRamp {
    low: u8,
    high: u8,
    next: u8,
    descending: bool,
    finished: bool,
}

impl SpeedRamp {
    /// Ramp between `low` and `high`. An inverted range is treated as empty.
    pub fn new(low: Percent, high: Percent) -> Self {
        Self {
            low: low.value(),
            high: high.value(),
            next: low.value(),
            descending: false,
            finished: low > high,
        }
    }

    /// The 1 % to 100 % and back ramp.
    pub fn full() -> Self {
        Self::new(Percent::saturating(1), Percent::FULL)
    }

    /// Number of steps in the whole ramp.
    pub fn step_count(&self) -> usize {
        if self.low > self.high {
            0
        } else {
            2 * (self.high - self.low) as usize + 2
        }
    }
}

impl Iterator for SpeedRamp {
    type Item = Percent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let current = self.next;
        if !self.descending {
            if current == self.high {
                self.descending = true;
            } else {
                self.next += 1;
            }
        } else if current == self.low {
            self.finished = true;
        } else {
            self.next -= 1;
        }

        Some(Percent::saturating(current))
    }
}
