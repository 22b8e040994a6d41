//! Pure indicator math over price/volume series.
//!
//! Stateless functions only; fetching data is the caller's concern, so
//! every function here is unit-testable on canned series.

pub mod math;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::{macd, rsi};
pub use trend::sma;
pub use volatility::{bollinger, BollingerBands};
pub use volume::{relative_volume, vwap};
