#![forbid(unsafe_code)]

//! Public facade crate for the nixie toggle display core.
//!
//! Re-exports the pieces a renderer host needs: the bit-state core, the
//! toggle models, and the animation driver.

pub use nixie_core::{BitError, BitField, BitWidth, Direction, Mode, Result, codec, step};
pub use nixie_runtime::{
    AnimationDriver, NIBBLE_COUNT, Readout, SWITCH_COUNT, SixteenBitPanel, TICK_INTERVAL,
    ToggleModel,
};

pub mod prelude {
    pub use nixie_core as core;
    pub use nixie_runtime as runtime;
}
