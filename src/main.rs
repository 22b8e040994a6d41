use alertix::backtest::{BacktestConfig, BacktestDriver};
use alertix::models::{Bar, IndicatorPolicy};
use alertix::signals::SignalEvaluator;
use chrono::{Duration, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bars = synthetic_bars(60, 100.0);
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let quote = closes[closes.len() - 1];

    let policy = IndicatorPolicy {
        sma_on: true,
        rsi_on: true,
        macd_on: true,
        match_count: 2,
        ..IndicatorPolicy::default()
    };

    let decision = SignalEvaluator::evaluate(&bars, quote, &policy, None)?;
    println!("Evaluation @ {:.2}:", quote);
    println!(
        "  fires={} ({}/{} triggers)",
        decision.fires, decision.fired_count, decision.required
    );
    for trigger in &decision.triggers {
        println!("  {:?}: fired={}", trigger.indicator, trigger.fired);
    }
    println!();

    let driver = BacktestDriver::new(BacktestConfig {
        policy,
        ..BacktestConfig::default()
    });
    let report = driver.run(&[("DEMO".to_string(), bars)]);
    println!("Backtest:");
    println!("  trades={}", report.summary.num_trades);
    println!(
        "  pnl={:.2} (wins={} losses={})",
        report.summary.total_pnl, report.summary.wins, report.summary.losses
    );
    println!("  ending cash={:.2}", report.summary.ending_cash);

    Ok(())
}

/// Deterministic rising-then-choppy series for the demo.
fn synthetic_bars(count: usize, base_price: f64) -> Vec<Bar> {
    let start = Utc::now() - Duration::days(count as i64);
    (0..count)
        .map(|i| {
            let drift = i as f64 * 0.4;
            let wobble = ((i % 7) as f64 - 3.0) * 0.6;
            let close = base_price + drift + wobble;
            Bar::new(
                start + Duration::days(i as i64),
                close - 0.3,
                close + 0.5,
                close - 0.5,
                close,
                1_000.0 + (i % 5) as f64 * 150.0,
            )
        })
        .collect()
}
