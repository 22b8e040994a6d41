//! Trade records appended by the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

/// One executed order. Append-only; never mutated after insert.
///
/// `pnl` is `None` for buys and `(sell_price - avg_cost) * qty` for sells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub action: TradeAction,
    pub price: f64,
    pub qty: u32,
    pub timestamp: DateTime<Utc>,
    pub pnl: Option<f64>,
}
