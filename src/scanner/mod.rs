//! Live polling scan loop.
//!
//! One sweep per interval: gate on market hours, walk the symbol
//! universe, evaluate each against the policy, and emit alerts through
//! the configured sink. Per-symbol failures are logged and skipped; a
//! single bad symbol never aborts a sweep.

pub mod market_hours;

pub use market_hours::MarketHours;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::ledger::Ledger;
use crate::models::bar::closes;
use crate::models::{Alert, IndicatorPolicy};
use crate::services::{AlertSink, MarketDataProvider, NewsProvider};
use crate::signals::SignalEvaluator;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Seconds between sweeps during market hours.
    pub scan_interval_secs: u64,
    /// Seconds between re-checks while the market is closed.
    pub off_hours_interval_secs: u64,
    /// Per-symbol alert suppression window.
    pub cooldown_secs: i64,
    /// Cap on alerts emitted in a single sweep.
    pub max_alerts_per_sweep: usize,
    /// Cap on capital committed per simulated entry.
    pub max_trade_amount: f64,
    /// Bars fetched per symbol per sweep.
    pub bar_limit: usize,
    /// Closes kept in the alert sparkline.
    pub sparkline_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: 60,
            off_hours_interval_secs: 900,
            cooldown_secs: 1800,
            max_alerts_per_sweep: 10,
            max_trade_amount: 1_000.0,
            bar_limit: 250,
            sparkline_len: 6,
        }
    }
}

/// What one sweep did, for logging and tests.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub scanned: usize,
    pub alerted: usize,
    pub skipped_cooldown: usize,
    pub skipped_error: usize,
}

struct ScanState {
    last_alert: HashMap<String, DateTime<Utc>>,
}

pub struct ScanLoop {
    config: ScanConfig,
    policy: IndicatorPolicy,
    symbols: Vec<String>,
    provider: Arc<dyn MarketDataProvider>,
    news: Option<Arc<dyn NewsProvider>>,
    sink: Arc<dyn AlertSink>,
    /// Present in simulation mode: fired signals become paper buys.
    ledger: Option<Arc<Mutex<Ledger>>>,
    hours: MarketHours,
    stop: Arc<AtomicBool>,
    state: ScanState,
}

impl ScanLoop {
    pub fn new(
        config: ScanConfig,
        policy: IndicatorPolicy,
        symbols: Vec<String>,
        provider: Arc<dyn MarketDataProvider>,
        sink: Arc<dyn AlertSink>,
    ) -> Self {
        Self {
            config,
            policy,
            symbols,
            provider,
            news: None,
            sink,
            ledger: None,
            hours: MarketHours::default(),
            stop: Arc::new(AtomicBool::new(false)),
            state: ScanState {
                last_alert: HashMap::new(),
            },
        }
    }

    pub fn with_news(mut self, news: Arc<dyn NewsProvider>) -> Self {
        self.news = Some(news);
        self
    }

    /// Enable simulation mode: every fired signal is applied to the
    /// ledger as an entry, mirroring the backtest driver's entry step.
    pub fn with_ledger(mut self, ledger: Arc<Mutex<Ledger>>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn with_market_hours(mut self, hours: MarketHours) -> Self {
        self.hours = hours;
        self
    }

    /// Handle for requesting shutdown. Checked once per sweep, not
    /// mid-symbol.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Poll until the stop flag is raised.
    pub async fn run(&mut self) {
        info!(
            symbols = self.symbols.len(),
            interval_secs = self.config.scan_interval_secs,
            "Scan loop started"
        );
        loop {
            if self.stop.load(Ordering::Relaxed) {
                info!("Stop requested, scan loop exiting");
                return;
            }

            let now = Utc::now();
            if !self.hours.is_open(now) {
                debug!(
                    sleep_secs = self.config.off_hours_interval_secs,
                    "Market closed, sleeping"
                );
                tokio::time::sleep(Duration::from_secs(self.config.off_hours_interval_secs))
                    .await;
                continue;
            }

            let stats = self.sweep(now).await;
            info!(
                scanned = stats.scanned,
                alerted = stats.alerted,
                skipped_cooldown = stats.skipped_cooldown,
                skipped_error = stats.skipped_error,
                "Sweep complete"
            );

            tokio::time::sleep(Duration::from_secs(self.config.scan_interval_secs)).await;
        }
    }

    /// One pass over the symbol universe. Public so tests can drive it
    /// with a fixed clock instead of the polling loop.
    pub async fn sweep(&mut self, now: DateTime<Utc>) -> SweepStats {
        let mut stats = SweepStats::default();
        let symbols = self.symbols.clone();

        for symbol in &symbols {
            if stats.alerted >= self.config.max_alerts_per_sweep {
                debug!(
                    cap = self.config.max_alerts_per_sweep,
                    "Alert cap reached, ending sweep early"
                );
                break;
            }

            if let Some(last) = self.state.last_alert.get(symbol) {
                if (now - *last).num_seconds() < self.config.cooldown_secs {
                    stats.skipped_cooldown += 1;
                    continue;
                }
            }

            stats.scanned += 1;
            match self.scan_symbol(symbol, now).await {
                Ok(true) => {
                    stats.alerted += 1;
                    self.state.last_alert.insert(symbol.clone(), now);
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Symbol skipped: {e}");
                    stats.skipped_error += 1;
                }
            }
        }

        stats
    }

    /// Evaluate one symbol; returns whether an alert was emitted.
    async fn scan_symbol(
        &self,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, EngineError> {
        let bars = self.provider.get_bars(symbol, self.config.bar_limit).await?;
        let quote = self.provider.get_quote(symbol).await?;
        if quote <= 0.0 {
            return Err(EngineError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("non-positive quote {quote}"),
            });
        }

        let news = match (&self.news, self.policy.news_on) {
            (Some(provider), true) => Some(provider.get_news(symbol).await?),
            _ => None,
        };

        let decision = SignalEvaluator::evaluate(&bars, quote, &self.policy, news.as_ref())?;
        if !decision.fires {
            return Ok(false);
        }

        let name = self.provider.get_name(symbol).await?;
        let close = closes(&bars);
        let alert = Alert::from_decision(
            symbol,
            &name,
            quote,
            now,
            &decision,
            &close,
            self.config.sparkline_len,
        );

        info!(
            symbol = %symbol,
            price = quote,
            fired = decision.fired_count,
            required = decision.required,
            triggers = %alert.triggers,
            "Signal fired: {} [{}]",
            symbol,
            alert.triggers
        );
        self.sink.emit(&alert).await?;

        if let Some(ledger) = &self.ledger {
            self.simulate_entry(ledger, symbol, quote, now);
        }

        Ok(true)
    }

    /// Simulation-mode entry, sized exactly like the backtest driver's.
    /// The lock is never held across an await.
    fn simulate_entry(
        &self,
        ledger: &Arc<Mutex<Ledger>>,
        symbol: &str,
        price: f64,
        now: DateTime<Utc>,
    ) {
        let Ok(mut ledger) = ledger.lock() else {
            warn!(symbol = %symbol, "Ledger lock poisoned, skipping simulated entry");
            return;
        };
        if ledger.holding(symbol).is_some() {
            debug!(symbol = %symbol, "Already holding, no simulated re-entry");
            return;
        }
        let budget = self.config.max_trade_amount.min(ledger.cash());
        let qty = (budget / price).floor() as u32;
        if qty == 0 {
            debug!(symbol = %symbol, price, "Budget too small for simulated entry");
            return;
        }
        match ledger.buy(symbol, qty, price, now) {
            Ok(trade) => info!(
                symbol = %symbol,
                qty = trade.qty,
                price = trade.price,
                "Simulated entry recorded"
            ),
            Err(e) => warn!(symbol = %symbol, error = %e, "Simulated entry rejected: {e}"),
        }
    }
}
