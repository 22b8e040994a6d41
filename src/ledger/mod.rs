//! Cash, holdings, and trade history for the paper-trading account.
//!
//! `buy` and `sell` are the only mutators; every invariant in the module
//! is maintained by keeping it that way. Not internally synchronized:
//! callers needing concurrent access serialize behind their own lock.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Trade, TradeAction};

/// A position in one symbol. Deleted from the ledger when qty hits zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub qty: u32,
    /// Weighted mean of all buys; unchanged by sells.
    pub avg_cost: f64,
    /// Cache of the most recent trade price, not authoritative.
    pub last_price: f64,
}

/// The account state machine: cash, holdings keyed by symbol, realized
/// P&L, and the append-only trade log.
///
/// Invariants after every operation: cash >= 0; every holding has
/// qty > 0; realized_pl equals the sum of SELL trade P&Ls.
#[derive(Debug, Clone)]
pub struct Ledger {
    cash: f64,
    holdings: BTreeMap<String, Holding>,
    trades: Vec<Trade>,
    realized_pl: f64,
}

impl Ledger {
    pub fn new(starting_cash: f64) -> Self {
        Self {
            cash: starting_cash,
            holdings: BTreeMap::new(),
            trades: Vec::new(),
            realized_pl: 0.0,
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn realized_pl(&self) -> f64 {
        self.realized_pl
    }

    pub fn holdings(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.values()
    }

    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.get(symbol)
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Execute a buy: debit cash, upsert the holding with a recomputed
    /// weighted average cost, append a BUY trade with no P&L.
    pub fn buy(
        &mut self,
        symbol: &str,
        qty: u32,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Trade, EngineError> {
        if qty == 0 {
            return Err(EngineError::InvalidOrder("buy qty must be > 0".into()));
        }
        if price <= 0.0 {
            return Err(EngineError::InvalidOrder(format!(
                "buy price must be > 0, got {price}"
            )));
        }
        let cost = qty as f64 * price;
        if cost > self.cash {
            return Err(EngineError::InsufficientFunds {
                required: cost,
                available: self.cash,
            });
        }

        self.cash -= cost;
        match self.holdings.get_mut(symbol) {
            Some(holding) => {
                let old_qty = holding.qty as f64;
                holding.avg_cost =
                    (holding.avg_cost * old_qty + cost) / (old_qty + qty as f64);
                holding.qty += qty;
                holding.last_price = price;
            }
            None => {
                self.holdings.insert(
                    symbol.to_string(),
                    Holding {
                        symbol: symbol.to_string(),
                        qty,
                        avg_cost: price,
                        last_price: price,
                    },
                );
            }
        }

        let trade = Trade {
            symbol: symbol.to_string(),
            action: TradeAction::Buy,
            price,
            qty,
            timestamp,
            pnl: None,
        };
        self.trades.push(trade.clone());
        Ok(trade)
    }

    /// Execute a sell: credit proceeds, realize P&L against the average
    /// cost, shrink or delete the holding, append a SELL trade.
    pub fn sell(
        &mut self,
        symbol: &str,
        qty: u32,
        price: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Trade, EngineError> {
        if qty == 0 {
            return Err(EngineError::InvalidOrder("sell qty must be > 0".into()));
        }
        let held = self.holdings.get(symbol).map(|h| h.qty).unwrap_or(0);
        if qty > held {
            return Err(EngineError::InsufficientPosition {
                symbol: symbol.to_string(),
                requested: qty,
                held,
            });
        }

        // The holding exists: held >= qty >= 1.
        let avg_cost = self.holdings[symbol].avg_cost;
        let proceeds = qty as f64 * price;
        let pnl = (price - avg_cost) * qty as f64;

        self.cash += proceeds;
        self.realized_pl += pnl;

        let remaining = held - qty;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else if let Some(holding) = self.holdings.get_mut(symbol) {
            holding.qty = remaining;
            holding.last_price = price;
        }

        let trade = Trade {
            symbol: symbol.to_string(),
            action: TradeAction::Sell,
            price,
            qty,
            timestamp,
            pnl: Some(pnl),
        };
        self.trades.push(trade.clone());
        Ok(trade)
    }

    /// Unrealized P&L across holdings, priced by the caller.
    ///
    /// Holdings the pricer cannot quote contribute zero.
    pub fn unrealized_pl(&self, price_for: impl Fn(&str) -> Option<f64>) -> f64 {
        self.holdings
            .values()
            .map(|h| match price_for(&h.symbol) {
                Some(price) => (price - h.avg_cost) * h.qty as f64,
                None => 0.0,
            })
            .sum()
    }

    /// Cash plus the market value of all holdings, priced by the caller.
    /// Unquotable holdings fall back to their cached last price.
    pub fn equity(&self, price_for: impl Fn(&str) -> Option<f64>) -> f64 {
        self.cash
            + self
                .holdings
                .values()
                .map(|h| price_for(&h.symbol).unwrap_or(h.last_price) * h.qty as f64)
                .sum::<f64>()
    }

    /// Clear everything back to a fresh account. Used between backtest
    /// runs and on explicit user reset.
    pub fn reset(&mut self, starting_cash: f64) {
        self.cash = starting_cash;
        self.holdings.clear();
        self.trades.clear();
        self.realized_pl = 0.0;
    }
}
