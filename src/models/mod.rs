//! Shared data models spanning the engine layers.

pub mod alert;
pub mod bar;
pub mod policy;
pub mod trade;

pub use alert::Alert;
pub use bar::Bar;
pub use policy::IndicatorPolicy;
pub use trade::{Trade, TradeAction};
