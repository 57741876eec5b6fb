#![forbid(unsafe_code)]

//! Runtime: stateful toggle models, the 16-bit composite panel, readout
//! snapshots for renderers, and the scoped animation driver.

pub mod composite;
pub mod driver;
pub mod readout;
pub mod toggle;

pub use composite::{NIBBLE_COUNT, SWITCH_COUNT, SixteenBitPanel};
pub use driver::{AnimationDriver, TICK_INTERVAL};
pub use readout::Readout;
pub use toggle::ToggleModel;
