#![forbid(unsafe_code)]

//! Interaction mode: manual toggling or timer-driven counting.
//!
//! Exactly one mode is active at a time. The mode gates which stimuli a
//! model accepts; switching modes never alters the current bit pattern.

use crate::stepper::Direction;

/// The active interaction mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Manual toggle control (the initial mode).
    #[default]
    Interactive,
    /// Count upward one step per tick.
    AutoIncrement,
    /// Count downward one step per tick.
    AutoDecrement,
}

impl Mode {
    /// Whether this mode is advanced by the animation timer.
    #[inline]
    #[must_use]
    pub const fn is_driven(self) -> bool {
        !matches!(self, Self::Interactive)
    }

    /// Stepping direction for driven modes, `None` when interactive.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Interactive => None,
            Self::AutoIncrement => Some(Direction::Increment),
            Self::AutoDecrement => Some(Direction::Decrement),
        }
    }
}
