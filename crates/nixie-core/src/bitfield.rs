#![forbid(unsafe_code)]

//! Fixed-width bit field addressed by positional weight.
//!
//! A [`BitField`] is an ordered sequence of booleans, most-significant bit
//! first, whose length is fixed at construction to one of the two supported
//! widths (4 or 16 bits). Each position carries a weight of `2^(width-1-i)`,
//! so for a 4-bit field the valid weights are `{8, 4, 2, 1}`.
//!
//! # Invariants
//!
//! 1. `bits.len() == width.bits()` for the whole lifetime of the field.
//! 2. `value()` is always within `0..=width.max_value()`.
//! 3. `flip` touches exactly one bit; `load` overwrites all of them.
//!
//! # Failure Modes
//!
//! - `flip` with a weight that is not a power of two inside the width:
//!   [`BitError::InvalidWeight`].
//! - `load` with a value that does not fit the width:
//!   [`BitError::OutOfRange`].

use crate::error::{BitError, Result};

// ---------------------------------------------------------------------------
// Width
// ---------------------------------------------------------------------------

/// The two supported field widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    /// One nibble: a single hex digit, values `0..=15`.
    W4,
    /// Four nibbles: four hex digits, values `0..=65535`.
    W16,
}

impl BitWidth {
    /// Number of bit positions.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::W4 => 4,
            Self::W16 => 16,
        }
    }

    /// `2^width`, the wraparound modulus. Needs 32 bits: `2^16` does not
    /// fit in a `u16`.
    #[inline]
    #[must_use]
    pub const fn modulus(self) -> u32 {
        1u32 << self.bits()
    }

    /// Largest representable value (`2^width - 1`).
    #[inline]
    #[must_use]
    pub const fn max_value(self) -> u16 {
        (self.modulus() - 1) as u16
    }

    /// Whether `weight` is a valid positional weight for this width.
    #[inline]
    #[must_use]
    pub const fn holds_weight(self, weight: u16) -> bool {
        weight.is_power_of_two() && (weight as u32) < self.modulus()
    }

    /// Positional weights in stored (MSB-first) order.
    ///
    /// For [`BitWidth::W4`] this yields `8, 4, 2, 1`.
    pub fn weights(self) -> impl DoubleEndedIterator<Item = u16> {
        (0..self.bits()).rev().map(|shift| 1u16 << shift)
    }
}

// ---------------------------------------------------------------------------
// BitField
// ---------------------------------------------------------------------------

/// Ordered fixed-width bit storage, most-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitField {
    width: BitWidth,
    bits: Vec<bool>,
}

impl BitField {
    /// Create a field of the given width with every bit cleared (value 0).
    #[must_use]
    pub fn new(width: BitWidth) -> Self {
        Self {
            width,
            bits: vec![false; width.bits()],
        }
    }

    /// The field's fixed width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> BitWidth {
        self.width
    }

    /// All bits in stored (MSB-first) order.
    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// State of the bit carrying `weight`.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidWeight`] if `weight` is not a power of two inside
    /// this width.
    pub fn is_set(&self, weight: u16) -> Result<bool> {
        Ok(self.bits[self.index_of(weight)?])
    }

    /// Flip the single bit carrying `weight`; no other bit changes.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidWeight`] if `weight` is not a power of two inside
    /// this width. The field is untouched on error.
    pub fn flip(&mut self, weight: u16) -> Result<()> {
        let index = self.index_of(weight)?;
        self.bits[index] = !self.bits[index];
        Ok(())
    }

    /// Unsigned integer value: the sum of the weights of all set bits.
    ///
    /// Always within `0..=width.max_value()`.
    #[must_use]
    pub fn value(&self) -> u16 {
        let top = self.width.bits() - 1;
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .map(|(i, _)| 1u16 << (top - i))
            .sum()
    }

    /// Overwrite every bit from `value`, MSB-first. No partial update: on
    /// error the prior state is fully retained.
    ///
    /// # Errors
    ///
    /// [`BitError::OutOfRange`] if `value >= 2^width`.
    pub fn load(&mut self, value: u16) -> Result<()> {
        if u32::from(value) >= self.width.modulus() {
            return Err(BitError::OutOfRange {
                value: u32::from(value),
                width: self.width.bits() as u8,
                max: self.width.max_value(),
            });
        }
        let top = self.width.bits() - 1;
        for (i, bit) in self.bits.iter_mut().enumerate() {
            *bit = (value >> (top - i)) & 1 == 1;
        }
        Ok(())
    }

    /// Stored-order index of the bit carrying `weight`.
    fn index_of(&self, weight: u16) -> Result<usize> {
        if !self.width.holds_weight(weight) {
            return Err(BitError::InvalidWeight {
                weight,
                width: self.width.bits() as u8,
            });
        }
        Ok(self.width.bits() - 1 - weight.trailing_zeros() as usize)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_zero() {
        let field = BitField::new(BitWidth::W4);
        assert_eq!(field.value(), 0);
        assert_eq!(field.bits(), &[false; 4]);

        let field = BitField::new(BitWidth::W16);
        assert_eq!(field.value(), 0);
        assert_eq!(field.bits().len(), 16);
    }

    #[test]
    fn width_constants() {
        assert_eq!(BitWidth::W4.bits(), 4);
        assert_eq!(BitWidth::W4.modulus(), 16);
        assert_eq!(BitWidth::W4.max_value(), 15);
        assert_eq!(BitWidth::W16.bits(), 16);
        assert_eq!(BitWidth::W16.modulus(), 65536);
        assert_eq!(BitWidth::W16.max_value(), 65535);
    }

    #[test]
    fn weights_are_msb_first() {
        let weights: Vec<u16> = BitWidth::W4.weights().collect();
        assert_eq!(weights, vec![8, 4, 2, 1]);

        let weights: Vec<u16> = BitWidth::W16.weights().collect();
        assert_eq!(weights[0], 32768);
        assert_eq!(weights[15], 1);
    }

    #[test]
    fn holds_weight_rejects_non_powers_and_oversize() {
        assert!(BitWidth::W4.holds_weight(8));
        assert!(BitWidth::W4.holds_weight(1));
        assert!(!BitWidth::W4.holds_weight(0));
        assert!(!BitWidth::W4.holds_weight(3));
        assert!(!BitWidth::W4.holds_weight(16));
        assert!(BitWidth::W16.holds_weight(16));
        assert!(BitWidth::W16.holds_weight(32768));
    }

    #[test]
    fn flip_sets_exactly_one_bit() {
        let mut field = BitField::new(BitWidth::W4);
        field.flip(4).unwrap();
        assert_eq!(field.bits(), &[false, true, false, false]);
        assert_eq!(field.value(), 4);
    }

    #[test]
    fn flip_weight_4_then_1_gives_5() {
        let mut field = BitField::new(BitWidth::W4);
        field.flip(4).unwrap();
        field.flip(1).unwrap();
        assert_eq!(field.value(), 5);
    }

    #[test]
    fn flip_all_four_weights_gives_15() {
        let mut field = BitField::new(BitWidth::W4);
        for weight in [8, 4, 2, 1] {
            field.flip(weight).unwrap();
        }
        assert_eq!(field.value(), 15);
        assert_eq!(field.bits(), &[true; 4]);
    }

    #[test]
    fn double_flip_restores_original_value() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(0b1010).unwrap();
        let before = field.value();
        field.flip(4).unwrap();
        field.flip(4).unwrap();
        assert_eq!(field.value(), before);
    }

    #[test]
    fn flip_invalid_weight_errors_and_leaves_state() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(9).unwrap();
        let err = field.flip(3).unwrap_err();
        assert_eq!(err, BitError::InvalidWeight { weight: 3, width: 4 });
        assert_eq!(field.value(), 9);

        // Valid in a 16-bit field, not in a 4-bit one.
        assert!(field.flip(16).is_err());
    }

    #[test]
    fn load_roundtrips_every_4bit_value() {
        let mut field = BitField::new(BitWidth::W4);
        for v in 0..=15 {
            field.load(v).unwrap();
            assert_eq!(field.value(), v);
        }
    }

    #[test]
    fn load_is_big_endian() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(0b1000).unwrap();
        assert_eq!(field.bits(), &[true, false, false, false]);
        field.load(0b0001).unwrap();
        assert_eq!(field.bits(), &[false, false, false, true]);
    }

    #[test]
    fn load_fully_overwrites_prior_state() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(15).unwrap();
        field.load(2).unwrap();
        assert_eq!(field.bits(), &[false, false, true, false]);
    }

    #[test]
    fn load_out_of_range_errors_and_leaves_state() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(7).unwrap();
        let err = field.load(16).unwrap_err();
        assert_eq!(
            err,
            BitError::OutOfRange {
                value: 16,
                width: 4,
                max: 15
            }
        );
        assert_eq!(field.value(), 7);
    }

    #[test]
    fn sixteen_bit_load_and_value() {
        let mut field = BitField::new(BitWidth::W16);
        field.load(0xA000).unwrap();
        assert_eq!(field.value(), 0xA000);
        assert!(field.bits()[0]);
        assert!(!field.bits()[1]);
        assert!(field.bits()[2]);

        // Every u16 fits a 16-bit field.
        field.load(u16::MAX).unwrap();
        assert_eq!(field.value(), 65535);
    }

    #[test]
    fn is_set_reports_individual_bits() {
        let mut field = BitField::new(BitWidth::W4);
        field.load(0b1010).unwrap();
        assert!(field.is_set(8).unwrap());
        assert!(!field.is_set(4).unwrap());
        assert!(field.is_set(2).unwrap());
        assert!(!field.is_set(1).unwrap());
        assert!(field.is_set(5).is_err());
    }
}
