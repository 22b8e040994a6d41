//! Alert payload emitted when a composite decision fires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signals::Decision;

/// The payload handed to an alert sink.
///
/// `triggers` and `sparkline` are comma-joined strings so the payload maps
/// directly onto the dashboard's alert row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
    pub triggers: String,
    pub sparkline: String,
    pub vwap: f64,
    pub vwap_diff: f64,
}

impl Alert {
    /// Build an alert from a fired decision.
    ///
    /// `closes` is the full close series; the sparkline keeps the last
    /// `sparkline_len` samples, rounded to cents.
    pub fn from_decision(
        symbol: &str,
        name: &str,
        price: f64,
        now: DateTime<Utc>,
        decision: &Decision,
        closes: &[f64],
        sparkline_len: usize,
    ) -> Self {
        let start = closes.len().saturating_sub(sparkline_len);
        let sparkline = closes[start..]
            .iter()
            .map(|c| format!("{:.2}", c))
            .collect::<Vec<_>>()
            .join(",");

        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            triggers: decision.display.join(","),
            sparkline,
            vwap: round2(decision.vwap.unwrap_or(0.0)),
            vwap_diff: round2(decision.vwap_diff.unwrap_or(0.0)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
