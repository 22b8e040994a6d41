//! Alertix: signal evaluation and position simulation for equities.
//!
//! The core engine is synchronous and pure: the indicator library turns
//! bar series into values, the signal evaluator turns those into a
//! composite decision under an [`models::IndicatorPolicy`], and the
//! [`ledger::Ledger`] applies decisions to a paper account. Around that
//! core sit two drivers: the [`backtest::BacktestDriver`] replays
//! historical bars, and the [`scanner::ScanLoop`] polls live data and
//! emits alerts.

pub mod backtest;
pub mod config;
pub mod error;
pub mod indicators;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod scanner;
pub mod services;
pub mod signals;

pub use error::EngineError;
