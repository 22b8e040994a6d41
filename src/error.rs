//! Crate-wide error taxonomy for the signal engine.

use thiserror::Error;

/// Typed failures surfaced at the engine boundaries.
///
/// `InsufficientHistory` and `DataUnavailable` are per-symbol, per-cycle
/// conditions: callers log and skip the symbol, never abort the sweep or
/// backtest run. The ledger variants reject the order and leave state
/// untouched.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient history: have {have} bars, need {need}")]
    InsufficientHistory { have: usize, need: usize },

    #[error("insufficient data: have {have} points, need {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("insufficient funds: order costs ${required:.2}, cash is ${available:.2}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("insufficient position: tried to sell {requested} {symbol}, holding {held}")]
    InsufficientPosition {
        symbol: String,
        requested: u32,
        held: u32,
    },

    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("invalid order: {0}")]
    InvalidOrder(String),

    #[error("alert delivery failed: {0}")]
    AlertDelivery(String),
}
