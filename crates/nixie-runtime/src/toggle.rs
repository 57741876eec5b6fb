#![forbid(unsafe_code)]

//! Toggle model: one owned bit field plus the active interaction mode.
//!
//! The model is the single writer of its field. In `Interactive` mode it
//! accepts manual flips; in a driven mode it accepts timer ticks, each of
//! which steps the value once and replaces all bits atomically. A flip
//! arriving in a driven mode is a defined no-op (UI gating, not a fault),
//! and a tick arriving in interactive mode likewise does nothing.
//!
//! # Invariants
//!
//! 1. The derived value is always within `0..=width.max_value()`.
//! 2. Mode switches never alter the current bit pattern.
//! 3. A tick changes the value by exactly one step in the mode's direction.

use nixie_core::{BitField, BitWidth, Mode, Result, step};
use tracing::{debug, trace};

/// A fixed-width set of toggle switches with mode-gated mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleModel {
    field: BitField,
    mode: Mode,
}

impl ToggleModel {
    /// Create a model at value 0 in `Interactive` mode.
    #[must_use]
    pub fn new(width: BitWidth) -> Self {
        Self {
            field: BitField::new(width),
            mode: Mode::Interactive,
        }
    }

    /// The field's fixed width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> BitWidth {
        self.field.width()
    }

    /// The active mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes. The current value is retained; only future stimuli are
    /// gated differently. Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = ?self.mode, to = ?mode, value = self.value(), "mode switch");
        self.mode = mode;
        true
    }

    /// Flip the bit carrying `weight`, if the model is interactive.
    ///
    /// Returns `Ok(true)` when the bit was flipped and `Ok(false)` when the
    /// stimulus was ignored because a driven mode is active.
    ///
    /// # Errors
    ///
    /// [`nixie_core::BitError::InvalidWeight`] if `weight` is not valid for
    /// this width.
    pub fn flip(&mut self, weight: u16) -> Result<bool> {
        if self.mode.is_driven() {
            trace!(weight, mode = ?self.mode, "flip ignored in driven mode");
            return Ok(false);
        }
        self.field.flip(weight)?;
        trace!(weight, value = self.value(), "flip applied");
        Ok(true)
    }

    /// Replace the whole bit pattern from an integer value.
    ///
    /// # Errors
    ///
    /// [`nixie_core::BitError::OutOfRange`] if `value` does not fit the
    /// width; the prior state is retained.
    pub fn set_value(&mut self, value: u16) -> Result<()> {
        self.field.load(value)
    }

    /// Apply one animation tick, if a driven mode is active.
    ///
    /// Steps the value once in the mode's direction and replaces all bits
    /// atomically. Returns `Ok(true)` when a step was applied and
    /// `Ok(false)` when the model is interactive.
    ///
    /// # Errors
    ///
    /// Structurally none: the stepped value is always within the width's
    /// domain, so the underlying load cannot fail.
    pub fn tick(&mut self) -> Result<bool> {
        let Some(direction) = self.mode.direction() else {
            return Ok(false);
        };
        let next = step(self.field.value(), self.width(), direction);
        self.field.load(next)?;
        trace!(value = next, ?direction, "tick applied");
        Ok(true)
    }

    /// Current integer value, always within `0..=width.max_value()`.
    #[inline]
    #[must_use]
    pub fn value(&self) -> u16 {
        self.field.value()
    }

    /// All bits in stored (MSB-first) order, for per-switch visuals.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        self.field.bits()
    }

    /// State of the bit carrying `weight`.
    ///
    /// # Errors
    ///
    /// [`nixie_core::BitError::InvalidWeight`] on a weight outside this
    /// width.
    pub fn is_set(&self, weight: u16) -> Result<bool> {
        self.field.is_set(weight)
    }
}
