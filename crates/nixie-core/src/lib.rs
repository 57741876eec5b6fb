#![forbid(unsafe_code)]

//! Core: bit-field state, pure value codecs, and the counter stepping rule.

pub mod bitfield;
pub mod codec;
pub mod error;
pub mod mode;
pub mod stepper;

pub use bitfield::{BitField, BitWidth};
pub use error::{BitError, Result};
pub use mode::Mode;
pub use stepper::{Direction, step};
