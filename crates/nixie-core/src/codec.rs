#![forbid(unsafe_code)]

//! Pure, stateless conversions between bit sequences, nibble values, and
//! their display forms (hex, binary, decimal).
//!
//! Everything here operates on explicit slices so the 16-bit view can
//! aggregate four independent 4-bit fields without the codec knowing about
//! field ownership.

use crate::error::{BitError, Result};

/// Upper bound (inclusive) for a single hex digit input.
const NIBBLE_MAX: u8 = 15;

/// One uppercase hex digit for a nibble value.
///
/// # Errors
///
/// [`BitError::OutOfRange`] if `value > 15`. Well-behaved callers never pass
/// an out-of-range value; a 4-bit field cannot produce one.
pub fn hex_digit(value: u8) -> Result<char> {
    if value > NIBBLE_MAX {
        return Err(BitError::OutOfRange {
            value: u32::from(value),
            width: 4,
            max: u16::from(NIBBLE_MAX),
        });
    }
    Ok(char::from_digit(u32::from(value), 16)
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('0'))
}

/// Concatenated hex digits for a sequence of nibble values, most-significant
/// nibble first (`[10, 0, 0, 0]` → `"A000"`).
///
/// # Errors
///
/// [`BitError::OutOfRange`] on the first nibble above 15.
pub fn hex_string(nibbles: &[u8]) -> Result<String> {
    nibbles.iter().map(|&n| hex_digit(n)).collect()
}

/// Hex digits for an MSB-first bit sequence, one digit per 4-bit chunk.
///
/// Infallible counterpart of [`hex_string`] for callers that already hold
/// bits: a 4-bit chunk can never exceed 15. A trailing chunk shorter than
/// 4 bits is still emitted as one digit.
#[must_use]
pub fn hex_of_bits(bits: &[bool]) -> String {
    bits.chunks(4)
        .filter_map(|chunk| char::from_digit(decimal(chunk), 16))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// `'1'`/`'0'` per bit in stored (MSB-first) order.
#[must_use]
pub fn binary_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}

/// Unsigned value of an explicit MSB-first bit sequence.
///
/// Pure counterpart of [`BitField::value`](crate::BitField::value), usable
/// across concatenated fields (up to 32 bits).
#[must_use]
pub fn decimal(bits: &[bool]) -> u32 {
    bits.iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit))
}

/// Combine nibble values MSB-first into one integer:
/// `Σ nibble_i × 16^(n-1-i)`. Four nibbles yield the 16-bit composite value.
///
/// # Errors
///
/// [`BitError::OutOfRange`] on the first nibble above 15.
pub fn compose_nibbles(nibbles: &[u8]) -> Result<u32> {
    nibbles.iter().try_fold(0u32, |acc, &n| {
        if n > NIBBLE_MAX {
            return Err(BitError::OutOfRange {
                value: u32::from(n),
                width: 4,
                max: u16::from(NIBBLE_MAX),
            });
        }
        Ok((acc << 4) | u32::from(n))
    })
}
