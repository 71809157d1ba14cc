//! Thrower rotation direction and throw phases.

/// Direction of drum rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise: rotates the drum to fill (direction line on).
    Clockwise,
    /// Counter-clockwise: returns the drum to discharge (direction line off).
    CounterClockwise,
}

impl Direction {
    /// Direction selected by the logical level of the direction line.
    #[inline]
    pub fn from_line(on: bool) -> Self {
        if on {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// Logical level of the direction line for this direction.
    #[inline]
    pub fn line_level(self) -> bool {
        matches!(self, Direction::Clockwise)
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Stage of a charge throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThrowPhase {
    /// Rotating forward to fill the drum.
    Fill,
    /// Coils de-energized between rotations.
    Settle,
    /// Rotating back to discharge.
    Return,
}

impl ThrowPhase {
    /// Rotation direction for a moving phase, `None` while settling.
    pub fn direction(self) -> Option<Direction> {
        match self {
            ThrowPhase::Fill => Some(Direction::Clockwise),
            ThrowPhase::Settle => None,
            ThrowPhase::Return => Some(Direction::CounterClockwise),
        }
    }
}
