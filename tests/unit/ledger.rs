//! Unit tests for the position ledger

use alertix::ledger::Ledger;
use alertix::models::TradeAction;
use alertix::EngineError;
use chrono::Utc;
use proptest::prelude::*;

#[test]
fn buy_debits_cash_and_creates_holding() {
    let mut ledger = Ledger::new(10_000.0);
    let trade = ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();

    assert_eq!(trade.action, TradeAction::Buy);
    assert_eq!(trade.qty, 10);
    assert_eq!(trade.pnl, None);
    assert_eq!(ledger.cash(), 9_000.0);

    let holding = ledger.holding("AAPL").unwrap();
    assert_eq!(holding.qty, 10);
    assert_eq!(holding.avg_cost, 100.0);
}

#[test]
fn buy_recomputes_weighted_average_cost() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();
    ledger.buy("AAPL", 10, 200.0, Utc::now()).unwrap();

    let holding = ledger.holding("AAPL").unwrap();
    assert_eq!(holding.qty, 20);
    assert_eq!(holding.avg_cost, 150.0);
}

#[test]
fn buy_insufficient_funds_leaves_state_untouched() {
    let mut ledger = Ledger::new(500.0);
    let err = ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientFunds { .. }));
    assert_eq!(ledger.cash(), 500.0);
    assert!(ledger.holding("AAPL").is_none());
    assert!(ledger.trades().is_empty());
}

#[test]
fn buy_rejects_degenerate_orders() {
    let mut ledger = Ledger::new(1_000.0);
    assert!(matches!(
        ledger.buy("AAPL", 0, 100.0, Utc::now()),
        Err(EngineError::InvalidOrder(_))
    ));
    assert!(matches!(
        ledger.buy("AAPL", 1, 0.0, Utc::now()),
        Err(EngineError::InvalidOrder(_))
    ));
    assert!(matches!(
        ledger.buy("AAPL", 1, -5.0, Utc::now()),
        Err(EngineError::InvalidOrder(_))
    ));
}

#[test]
fn sell_realizes_pnl_against_average_cost() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();
    let trade = ledger.sell("AAPL", 4, 110.0, Utc::now()).unwrap();

    assert_eq!(trade.action, TradeAction::Sell);
    assert_eq!(trade.pnl, Some(40.0));
    assert_eq!(ledger.realized_pl(), 40.0);
    assert_eq!(ledger.cash(), 9_000.0 + 440.0);

    // Partial sell keeps the average cost as-is.
    let holding = ledger.holding("AAPL").unwrap();
    assert_eq!(holding.qty, 6);
    assert_eq!(holding.avg_cost, 100.0);
}

#[test]
fn sell_more_than_held_is_rejected() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 5, 100.0, Utc::now()).unwrap();
    let err = ledger.sell("AAPL", 6, 100.0, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InsufficientPosition {
            requested: 6,
            held: 5,
            ..
        }
    ));
    assert_eq!(ledger.holding("AAPL").unwrap().qty, 5);
}

#[test]
fn sell_unknown_symbol_is_rejected() {
    let mut ledger = Ledger::new(10_000.0);
    let err = ledger.sell("MSFT", 1, 100.0, Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InsufficientPosition { held: 0, .. }
    ));
}

#[test]
fn full_sell_then_rebuy_starts_a_fresh_cost_basis() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();
    ledger.sell("AAPL", 10, 120.0, Utc::now()).unwrap();
    assert!(ledger.holding("AAPL").is_none());

    ledger.buy("AAPL", 5, 80.0, Utc::now()).unwrap();
    let holding = ledger.holding("AAPL").unwrap();
    assert_eq!(holding.avg_cost, 80.0);
    assert_eq!(holding.qty, 5);
}

#[test]
fn unrealized_pl_and_equity() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();

    let unrealized = ledger.unrealized_pl(|_| Some(105.0));
    assert_eq!(unrealized, 50.0);

    let equity = ledger.equity(|_| Some(105.0));
    assert_eq!(equity, 9_000.0 + 1_050.0);

    // Unquotable holdings: zero unrealized, last-price fallback for equity.
    assert_eq!(ledger.unrealized_pl(|_| None), 0.0);
    assert_eq!(ledger.equity(|_| None), 9_000.0 + 1_000.0);
}

#[test]
fn reset_clears_everything() {
    let mut ledger = Ledger::new(10_000.0);
    ledger.buy("AAPL", 10, 100.0, Utc::now()).unwrap();
    ledger.sell("AAPL", 5, 120.0, Utc::now()).unwrap();

    ledger.reset(5_000.0);
    assert_eq!(ledger.cash(), 5_000.0);
    assert_eq!(ledger.realized_pl(), 0.0);
    assert!(ledger.trades().is_empty());
    assert_eq!(ledger.holdings().count(), 0);
}

#[derive(Debug, Clone)]
enum Op {
    Buy { symbol: usize, qty: u32, price: f64 },
    Sell { symbol: usize, qty: u32, price: f64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let symbol = 0..3usize;
    let qty = 1..20u32;
    let price = (1..500u32).prop_map(|c| c as f64 / 4.0);
    prop_oneof![
        (symbol.clone(), qty.clone(), price.clone())
            .prop_map(|(symbol, qty, price)| Op::Buy { symbol, qty, price }),
        (symbol, qty, price).prop_map(|(symbol, qty, price)| Op::Sell { symbol, qty, price }),
    ]
}

proptest! {
    /// After any sequence of accepted operations: cash stays non-negative,
    /// every holding has positive quantity, and realized P&L equals the
    /// sum of SELL trade P&Ls.
    #[test]
    fn invariants_hold_under_random_operations(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let symbols = ["AAPL", "MSFT", "GOOG"];
        let mut ledger = Ledger::new(2_000.0);

        for op in ops {
            // Rejected operations must leave state valid too.
            let _ = match op {
                Op::Buy { symbol, qty, price } => {
                    ledger.buy(symbols[symbol], qty, price, Utc::now())
                }
                Op::Sell { symbol, qty, price } => {
                    ledger.sell(symbols[symbol], qty, price, Utc::now())
                }
            };

            prop_assert!(ledger.cash() >= 0.0);
            for holding in ledger.holdings() {
                prop_assert!(holding.qty > 0);
            }
            let sell_pnl: f64 = ledger
                .trades()
                .iter()
                .filter_map(|t| t.pnl)
                .sum();
            prop_assert!((ledger.realized_pl() - sell_pnl).abs() < 1e-9);
        }
    }
}
