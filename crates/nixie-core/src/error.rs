#![forbid(unsafe_code)]

//! Error taxonomy for the bit-state core.
//!
//! Every variant is a contract violation by the caller: none of them is
//! reachable through the documented UI stimuli (a valid flip, a timer tick),
//! so the runtime layer treats them as defects rather than recoverable
//! conditions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitError {
    /// The weight is not one of the valid powers of two for the field width.
    #[error("invalid weight {weight} for a {width}-bit field")]
    InvalidWeight { weight: u16, width: u8 },

    /// The value does not fit in the field width.
    #[error("value {value} out of range for a {width}-bit field (max {max})")]
    OutOfRange { value: u32, width: u8, max: u16 },

    /// A nibble or switch index outside the panel's layout.
    #[error("index {index} out of range (expected < {count})")]
    InvalidIndex { index: usize, count: usize },
}
