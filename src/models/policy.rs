//! Indicator policy: which indicators are enabled and their thresholds.
//!
//! One typed structure with named fields and explicit defaults, replacing
//! the per-installation settings row read by the dashboard.

use serde::{Deserialize, Serialize};

/// Configuration for the signal evaluator.
///
/// Every `*_on` flag is paired with its numeric parameters; disabled
/// indicators never block a decision and never count toward `match_count`.
/// `match_count == 0` means "require all enabled indicators".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorPolicy {
    pub sma_on: bool,
    pub sma_length: usize,

    pub rsi_on: bool,
    pub rsi_length: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,

    pub macd_on: bool,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,

    pub bb_on: bool,
    pub bb_length: usize,
    pub bb_stddev: f64,
    /// Require an actual upward crossing of the upper band, not merely a
    /// close above it.
    pub bb_breakout_on: bool,

    pub volume_on: bool,
    pub volume_multiplier: f64,

    pub vwap_on: bool,
    pub vwap_threshold: f64,

    pub rsi_slope_on: bool,
    pub macd_hist_on: bool,

    pub news_on: bool,

    /// Minimum number of enabled indicator triggers required to fire.
    /// 0 (or a value above the enabled count) requires all enabled.
    pub match_count: usize,
}

impl Default for IndicatorPolicy {
    fn default() -> Self {
        Self {
            sma_on: false,
            sma_length: 20,
            rsi_on: false,
            rsi_length: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_on: false,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_on: false,
            bb_length: 20,
            bb_stddev: 2.0,
            bb_breakout_on: false,
            volume_on: false,
            volume_multiplier: 1.0,
            vwap_on: false,
            vwap_threshold: 0.0,
            rsi_slope_on: false,
            macd_hist_on: false,
            news_on: false,
            match_count: 0,
        }
    }
}

impl IndicatorPolicy {
    /// Number of enabled indicators. RSI counts once even though it can
    /// trigger in either direction.
    pub fn enabled_count(&self) -> usize {
        [
            self.sma_on,
            self.rsi_on,
            self.macd_on,
            self.bb_on,
            self.volume_on,
            self.vwap_on,
            self.rsi_slope_on,
            self.macd_hist_on,
            self.news_on,
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }

    /// Triggers required for a composite decision to fire.
    pub fn required_matches(&self) -> usize {
        let enabled = self.enabled_count();
        if self.match_count > 0 && self.match_count <= enabled {
            self.match_count
        } else {
            enabled
        }
    }

    /// Minimum bar count needed to satisfy the longest enabled lookback.
    ///
    /// Lookback indicators carry a warm-up floor of 20 bars; a policy with
    /// only VWAP/news enabled (or nothing at all) evaluates on any
    /// non-trivial series.
    pub fn min_history(&self) -> usize {
        let lookback_enabled = self.sma_on
            || self.rsi_on
            || self.macd_on
            || self.bb_on
            || self.volume_on
            || self.rsi_slope_on
            || self.macd_hist_on;
        let mut need = if lookback_enabled { 20 } else { 2 };
        if self.sma_on {
            need = need.max(self.sma_length);
        }
        if self.rsi_on {
            need = need.max(self.rsi_length + 1);
        }
        if self.rsi_slope_on {
            need = need.max(self.rsi_length + 2);
        }
        if self.macd_on || self.macd_hist_on {
            need = need.max(self.macd_slow + self.macd_signal);
        }
        if self.bb_on {
            need = need.max(self.bb_length);
        }
        need
    }
}
