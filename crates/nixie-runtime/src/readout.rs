#![forbid(unsafe_code)]

//! Readout: the renderer-facing snapshot of a model's derived values.
//!
//! A renderer never computes anything — it reads per-switch booleans for the
//! toggle visuals, hex digits for the tubes, and the binary/decimal labels.
//! [`Readout`] captures all of that at one instant so a draw pass sees a
//! consistent view even if the model mutates afterwards.

use nixie_core::codec;

use crate::composite::SixteenBitPanel;
use crate::toggle::ToggleModel;

/// Immutable snapshot of everything a renderer displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    bits: Vec<bool>,
    hex: String,
    binary: String,
    decimal: u32,
}

impl Readout {
    fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
            hex: codec::hex_of_bits(bits),
            binary: codec::binary_string(bits),
            decimal: codec::decimal(bits),
        }
    }

    /// Snapshot a single toggle model (one hex digit per nibble of width).
    #[must_use]
    pub fn of_model(model: &ToggleModel) -> Self {
        Self::from_bits(model.bits())
    }

    /// Snapshot the 16-bit panel (four hex digits).
    #[must_use]
    pub fn of_panel(panel: &SixteenBitPanel) -> Self {
        Self::from_bits(&panel.bits())
    }

    /// Per-switch states in stored (MSB-first) order.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Uppercase hex digits, most significant first (`"5"`, `"A000"`).
    #[inline]
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Hex string with a `0x` prefix, as shown under the tube row.
    #[must_use]
    pub fn hex_prefixed(&self) -> String {
        format!("0x{}", self.hex)
    }

    /// `'1'`/`'0'` per switch, MSB-first (`"0101"`).
    #[inline]
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Decimal value of the whole field.
    #[inline]
    #[must_use]
    pub const fn decimal(&self) -> u32 {
        self.decimal
    }
}
