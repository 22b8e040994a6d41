//! Volume indicators: VWAP, relative volume

pub mod relative_volume;
pub mod vwap;

pub use relative_volume::*;
pub use vwap::*;
