#![forbid(unsafe_code)]

//! Sixteen-bit panel: four nibble toggle models composed into one counter.
//!
//! Each nibble is an independent [`ToggleModel`] feeding its own display
//! digit, but driven ticks treat the panel as a single 16-bit entity: the
//! composite value is recomposed from all four nibbles, stepped once, and
//! redistributed (bits 15..12 into nibble 0 down to bits 3..0 into
//! nibble 3). The redistribution is atomic with respect to one tick — the
//! new nibble values are computed up front, before any field is touched.
//!
//! # Invariants
//!
//! 1. The composite value always equals the MSB-first concatenation of the
//!    four nibble bit patterns.
//! 2. All four nibbles share one mode; a mode switch never alters bits.
//! 3. One tick changes the composite value by exactly one step, wrapping
//!    65535 → 0 (increment) and 0 → 65535 (decrement).

use nixie_core::codec;
use nixie_core::{BitError, BitWidth, Mode, Result, step};
use tracing::trace;

use crate::toggle::ToggleModel;

/// Number of nibble groups (hex digits) on the panel.
pub const NIBBLE_COUNT: usize = 4;

/// Number of individual toggle switches on the panel.
pub const SWITCH_COUNT: usize = 16;

/// Four 4-bit toggle models acting as one 16-bit counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SixteenBitPanel {
    nibbles: [ToggleModel; NIBBLE_COUNT],
    mode: Mode,
}

impl SixteenBitPanel {
    /// Create a panel at composite value 0 in `Interactive` mode.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nibbles: std::array::from_fn(|_| ToggleModel::new(BitWidth::W4)),
            mode: Mode::Interactive,
        }
    }

    /// The active mode, shared by all four nibbles.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch modes on the panel and every nibble. Bits are untouched.
    /// Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        for nibble in &mut self.nibbles {
            nibble.set_mode(mode);
        }
        true
    }

    /// The nibble model at `index` (0 = most significant).
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidIndex`] if `index >= 4`.
    pub fn nibble(&self, index: usize) -> Result<&ToggleModel> {
        self.nibbles.get(index).ok_or(BitError::InvalidIndex {
            index,
            count: NIBBLE_COUNT,
        })
    }

    /// Current value of each nibble, most significant first.
    #[must_use]
    pub fn nibble_values(&self) -> [u8; NIBBLE_COUNT] {
        std::array::from_fn(|i| self.nibbles[i].value() as u8)
    }

    /// All 16 bits, MSB-first across nibbles.
    #[must_use]
    pub fn bits(&self) -> [bool; SWITCH_COUNT] {
        let mut bits = [false; SWITCH_COUNT];
        for (i, nibble) in self.nibbles.iter().enumerate() {
            bits[i * 4..(i + 1) * 4].copy_from_slice(nibble.bits());
        }
        bits
    }

    /// Composite 16-bit value recomposed from all four nibbles.
    #[must_use]
    pub fn value(&self) -> u16 {
        codec::decimal(&self.bits()) as u16
    }

    /// Flip one switch identified by nibble index and weight.
    ///
    /// Returns `Ok(true)` when applied, `Ok(false)` when ignored because a
    /// driven mode is active.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidIndex`] for a nibble index past 3,
    /// [`BitError::InvalidWeight`] for a weight outside `{8, 4, 2, 1}`.
    pub fn flip(&mut self, nibble: usize, weight: u16) -> Result<bool> {
        let model = self.nibbles.get_mut(nibble).ok_or(BitError::InvalidIndex {
            index: nibble,
            count: NIBBLE_COUNT,
        })?;
        model.flip(weight)
    }

    /// Flip one switch by its flat panel index, 0..=15 left to right
    /// (switch 0 is the most significant bit of nibble 0).
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidIndex`] if `index >= 16`.
    pub fn flip_switch(&mut self, index: usize) -> Result<bool> {
        if index >= SWITCH_COUNT {
            return Err(BitError::InvalidIndex {
                index,
                count: SWITCH_COUNT,
            });
        }
        let weight = 8u16 >> (index % 4);
        self.flip(index / 4, weight)
    }

    /// Atomically set the composite value, redistributing bits 15..12,
    /// 11..8, 7..4, and 3..0 across nibbles 0..=3.
    ///
    /// Every `u16` is in range for the panel, so this cannot fail partway:
    /// the four nibble values are computed before any field is written.
    pub fn set_value(&mut self, value: u16) -> Result<()> {
        let parts: [u16; NIBBLE_COUNT] =
            std::array::from_fn(|i| (value >> (4 * (NIBBLE_COUNT - 1 - i))) & 0xF);
        for (nibble, part) in self.nibbles.iter_mut().zip(parts) {
            nibble.set_value(part)?;
        }
        Ok(())
    }

    /// Apply one shared animation tick, if a driven mode is active.
    ///
    /// Recomposes the 16-bit value, steps it once in the mode's direction,
    /// and redistributes it across all four nibbles.
    ///
    /// # Errors
    ///
    /// Structurally none: the stepped value always fits the panel.
    pub fn tick(&mut self) -> Result<bool> {
        let Some(direction) = self.mode.direction() else {
            return Ok(false);
        };
        let next = step(self.value(), BitWidth::W16, direction);
        self.set_value(next)?;
        trace!(value = next, ?direction, "composite tick applied");
        Ok(true)
    }
}

impl Default for SixteenBitPanel {
    fn default() -> Self {
        Self::new()
    }
}
