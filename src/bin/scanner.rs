//! Alertix Scanner
//!
//! Runs the live scan loop against the configured symbol universe and
//! emits alerts to the log or a webhook. Paper trading is enabled with
//! SIMULATION_MODE=1.

use std::env;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

use alertix::config;
use alertix::ledger::Ledger;
use alertix::logging;
use alertix::scanner::ScanLoop;
use alertix::services::{
    AlertSink, LogAlertSink, PlaceholderMarketDataProvider, PlaceholderNewsProvider,
    WebhookAlertSink,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let environment = config::get_environment();
    info!("Starting Alertix Scanner");
    info!(environment = %environment, "Environment");

    let scan_config = config::load_scan_config();
    let policy = config::load_policy();
    let symbols = config::load_symbols();

    if symbols.is_empty() {
        return Err("no symbols configured".into());
    }
    info!(symbols = ?symbols, "Scanning {} symbols", symbols.len());
    info!(
        interval = scan_config.scan_interval_secs,
        cooldown = scan_config.cooldown_secs,
        "Sweep every {} seconds", scan_config.scan_interval_secs
    );

    // TODO: wire a real vendor once one is selected; the placeholder
    // returns no data and the loop logs every symbol as skipped.
    let provider = Arc::new(PlaceholderMarketDataProvider);

    let sink: Arc<dyn AlertSink> = match env::var("ALERT_WEBHOOK_URL") {
        Ok(url) if !url.is_empty() => {
            info!(endpoint = %url, "Alerts delivered via webhook");
            Arc::new(WebhookAlertSink::new(url))
        }
        _ => {
            info!("Alerts delivered via log");
            Arc::new(LogAlertSink)
        }
    };

    let news_on = policy.news_on;
    let mut scan_loop = ScanLoop::new(scan_config, policy, symbols, provider, sink)
        .with_market_hours(config::load_market_hours());
    if news_on {
        scan_loop = scan_loop.with_news(Arc::new(PlaceholderNewsProvider));
    }

    let simulate = env::var("SIMULATION_MODE")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if simulate {
        let cash = config::starting_cash();
        info!(starting_cash = cash, "Simulation mode enabled");
        scan_loop = scan_loop.with_ledger(Arc::new(Mutex::new(Ledger::new(cash))));
    }

    let stop = scan_loop.stop_flag();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for shutdown signal");
            return;
        }
        info!("Shutdown signal received");
        stop.store(true, Ordering::Relaxed);
    });

    scan_loop.run().await;
    info!("Scanner stopped");
    Ok(())
}
