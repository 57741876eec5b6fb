#![forbid(unsafe_code)]

//! Counter stepping rule: one increment or decrement with modulo wraparound.
//!
//! Modulo arithmetic on a fixed-width field gives the rollover of a hardware
//! binary counter for free: 15 steps up to 0 and 0 steps down to 15 on a
//! 4-bit field, with no boundary special-casing.

use crate::bitfield::BitWidth;

/// Stepping direction for a driven counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Increment,
    Decrement,
}

/// Next counter value after one step in `direction`, wrapping at the width's
/// modulus.
///
/// Pure and total over its domain. `current` outside `0..2^width` is a
/// caller bug; the value is reduced into the domain first so the result is
/// still well-formed.
#[must_use]
pub fn step(current: u16, width: BitWidth, direction: Direction) -> u16 {
    let modulus = width.modulus();
    debug_assert!(u32::from(current) < modulus, "current {current} out of domain");
    let current = u32::from(current) % modulus;
    let next = match direction {
        Direction::Increment => (current + 1) % modulus,
        Direction::Decrement => (current + modulus - 1) % modulus,
    };
    next as u16
}
