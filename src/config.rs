//! Environment-driven configuration.
//!
//! Everything is read from environment variables (loaded from `.env` by
//! the binaries) with defaults that match the sandbox setup. The policy
//! can optionally be loaded from a JSON file.

use std::env;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::models::IndicatorPolicy;
use crate::scanner::{MarketHours, ScanConfig};

/// Deployment environment, e.g. "production" or "sandbox".
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Scan loop settings from the environment, defaulting per `ScanConfig`.
pub fn load_scan_config() -> ScanConfig {
    let defaults = ScanConfig::default();
    ScanConfig {
        scan_interval_secs: env_parsed("SCAN_INTERVAL_SECONDS", defaults.scan_interval_secs),
        off_hours_interval_secs: env_parsed(
            "OFF_HOURS_INTERVAL_SECONDS",
            defaults.off_hours_interval_secs,
        ),
        cooldown_secs: env_parsed("ALERT_COOLDOWN_SECONDS", defaults.cooldown_secs),
        max_alerts_per_sweep: env_parsed("MAX_ALERTS_PER_SWEEP", defaults.max_alerts_per_sweep),
        max_trade_amount: env_parsed("MAX_TRADE_AMOUNT", defaults.max_trade_amount),
        bar_limit: env_parsed("BAR_LIMIT", defaults.bar_limit),
        sparkline_len: env_parsed("SPARKLINE_LEN", defaults.sparkline_len),
    }
}

/// Session window from the environment. The offset defaults to US
/// Eastern standard time; set `MARKET_UTC_OFFSET_MINUTES` to -240 while
/// daylight saving is in effect, or to another exchange's offset.
pub fn load_market_hours() -> MarketHours {
    let defaults = MarketHours::default();
    MarketHours {
        open_minute: env_parsed("MARKET_OPEN_MINUTE", defaults.open_minute),
        close_minute: env_parsed("MARKET_CLOSE_MINUTE", defaults.close_minute),
        utc_offset_minutes: env_parsed("MARKET_UTC_OFFSET_MINUTES", defaults.utc_offset_minutes),
    }
}

/// Paper-trading starting balance.
pub fn starting_cash() -> f64 {
    env_parsed("STARTING_CASH", 10_000.0)
}

/// Symbol universe: one symbol per line in `SYMBOLS_FILE` (default
/// `symbols.txt`), falling back to a small built-in list when the file
/// is absent or empty.
pub fn load_symbols() -> Vec<String> {
    let path = env::var("SYMBOLS_FILE").unwrap_or_else(|_| "symbols.txt".to_string());
    let fallback = || {
        vec![
            "AAPL".to_string(),
            "MSFT".to_string(),
            "GOOG".to_string(),
            "TSLA".to_string(),
        ]
    };

    if !Path::new(&path).exists() {
        return fallback();
    }
    match fs::read_to_string(&path) {
        Ok(contents) => {
            let symbols: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_uppercase)
                .collect();
            if symbols.is_empty() {
                warn!(path = %path, "Symbols file is empty, using built-in list");
                fallback()
            } else {
                info!(path = %path, count = symbols.len(), "Loaded symbol universe");
                symbols
            }
        }
        Err(e) => {
            warn!(path = %path, error = %e, "Failed to read symbols file, using built-in list");
            fallback()
        }
    }
}

/// Indicator policy from `POLICY_FILE` (JSON), or the defaults when the
/// variable is unset. A malformed file falls back to defaults with a
/// warning rather than aborting startup.
pub fn load_policy() -> IndicatorPolicy {
    let Ok(path) = env::var("POLICY_FILE") else {
        return IndicatorPolicy::default();
    };
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(policy) => {
                info!(path = %path, "Loaded indicator policy");
                policy
            }
            Err(e) => {
                warn!(path = %path, error = %e, "Malformed policy file, using defaults");
                IndicatorPolicy::default()
            }
        },
        Err(e) => {
            warn!(path = %path, error = %e, "Failed to read policy file, using defaults");
            IndicatorPolicy::default()
        }
    }
}
