//! Historical replay of the signal evaluator against a paper ledger.
//!
//! One state machine per symbol (FLAT -> ENTERED -> FLAT, repeating),
//! all symbols drawing on a shared cash pool. Symbol processing order
//! decides who gets capital first when cash is scarce; per-symbol P&L
//! is unaffected.

pub mod report;

pub use report::{BacktestReport, BacktestSummary, SymbolSummary};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::ledger::Ledger;
use crate::models::{Bar, IndicatorPolicy};
use crate::signals::SignalEvaluator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    pub starting_cash: f64,
    /// Cap on capital committed to a single entry.
    pub max_trade_amount: f64,
    /// Exit when price falls this fraction below the peak since entry.
    /// 0 disables the trailing stop.
    pub trailing_stop_pct: f64,
    /// Exit after holding this many bars, if set.
    pub sell_after_bars: Option<usize>,
    pub policy: IndicatorPolicy,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            starting_cash: 10_000.0,
            max_trade_amount: 1_000.0,
            trailing_stop_pct: 0.05,
            sell_after_bars: None,
            policy: IndicatorPolicy::default(),
        }
    }
}

enum Position {
    Flat,
    Entered {
        qty: u32,
        entry_index: usize,
        peak_price: f64,
    },
}

pub struct BacktestDriver {
    config: BacktestConfig,
}

impl BacktestDriver {
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    /// Replay each symbol's bar series through the evaluator and ledger.
    ///
    /// Deterministic: identical inputs produce identical trade lists and
    /// summaries. Bar 0 only seeds indicator warm-up; evaluation starts
    /// at bar 1.
    pub fn run(&self, series: &[(String, Vec<Bar>)]) -> BacktestReport {
        let mut ledger = Ledger::new(self.config.starting_cash);

        for (symbol, bars) in series {
            if let Err(e) = self.run_symbol(symbol, bars, &mut ledger) {
                warn!(symbol = %symbol, error = %e, "Backtest aborted for symbol: {e}");
            }
        }

        let summary = BacktestSummary::from_trades(ledger.trades(), ledger.cash());
        info!(
            num_trades = summary.num_trades,
            total_pnl = summary.total_pnl,
            ending_cash = summary.ending_cash,
            "Backtest complete"
        );
        BacktestReport {
            trades: ledger.trades().to_vec(),
            summary,
        }
    }

    fn run_symbol(
        &self,
        symbol: &str,
        bars: &[Bar],
        ledger: &mut Ledger,
    ) -> Result<(), EngineError> {
        if bars.len() < 2 {
            debug!(symbol = %symbol, bars = bars.len(), "Series too short, skipping");
            return Ok(());
        }

        let mut position = Position::Flat;

        for i in 1..bars.len() {
            let price = bars[i].close;
            let timestamp = bars[i].timestamp;

            match position {
                Position::Flat => {
                    let decision = match SignalEvaluator::evaluate(
                        &bars[..=i],
                        price,
                        &self.config.policy,
                        None,
                    ) {
                        Ok(d) => d,
                        Err(EngineError::InsufficientHistory { .. }) => continue,
                        Err(e) => return Err(e),
                    };
                    if !decision.fires {
                        continue;
                    }
                    let budget = self.config.max_trade_amount.min(ledger.cash());
                    let qty = (budget / price).floor() as u32;
                    if qty == 0 {
                        continue;
                    }
                    ledger.buy(symbol, qty, price, timestamp)?;
                    debug!(symbol = %symbol, qty, price, bar = i, "Backtest entry");
                    position = Position::Entered {
                        qty,
                        entry_index: i,
                        peak_price: price,
                    };
                }
                Position::Entered {
                    qty,
                    entry_index,
                    ref mut peak_price,
                } => {
                    *peak_price = peak_price.max(price);
                    let trailing = self.config.trailing_stop_pct > 0.0
                        && price <= *peak_price * (1.0 - self.config.trailing_stop_pct);
                    let timed = self
                        .config
                        .sell_after_bars
                        .map(|limit| i - entry_index >= limit)
                        .unwrap_or(false);
                    if trailing || timed {
                        ledger.sell(symbol, qty, price, timestamp)?;
                        debug!(
                            symbol = %symbol,
                            qty,
                            price,
                            bar = i,
                            trailing,
                            timed,
                            "Backtest exit"
                        );
                        position = Position::Flat;
                    }
                }
            }
        }

        // No dangling positions survive a run.
        if let Position::Entered { qty, .. } = position {
            let last = &bars[bars.len() - 1];
            ledger.sell(symbol, qty, last.close, last.timestamp)?;
            debug!(symbol = %symbol, qty, price = last.close, "Force-closed at end of series");
        }

        Ok(())
    }
}
