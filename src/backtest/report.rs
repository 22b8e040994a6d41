//! Backtest output: trade list plus summary rollup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Trade, TradeAction};

/// Per-symbol slice of the summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub pnl: f64,
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
}

/// Run-level rollup. Wins and losses count SELL trades by P&L sign;
/// a flat sell counts as neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BacktestSummary {
    pub total_pnl: f64,
    pub ending_cash: f64,
    pub num_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub by_symbol: BTreeMap<String, SymbolSummary>,
}

/// Everything a backtest run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub trades: Vec<Trade>,
    pub summary: BacktestSummary,
}

impl BacktestSummary {
    /// Build the rollup from a completed trade list.
    pub fn from_trades(trades: &[Trade], ending_cash: f64) -> Self {
        let mut summary = Self {
            ending_cash,
            num_trades: trades.len(),
            ..Self::default()
        };
        for trade in trades {
            let entry = summary.by_symbol.entry(trade.symbol.clone()).or_default();
            entry.trades += 1;
            if trade.action == TradeAction::Sell {
                let pnl = trade.pnl.unwrap_or(0.0);
                summary.total_pnl += pnl;
                entry.pnl += pnl;
                if pnl > 0.0 {
                    summary.wins += 1;
                    entry.wins += 1;
                } else if pnl < 0.0 {
                    summary.losses += 1;
                    entry.losses += 1;
                }
            }
        }
        summary
    }
}
