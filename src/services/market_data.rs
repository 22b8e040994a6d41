//! Market data access behind a provider trait.
//!
//! The scan loop and backtests only ever see this trait, so swapping the
//! data vendor (or faking one in tests) is a one-struct change.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::Bar;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Most recent `limit` bars for the symbol, oldest first.
    async fn get_bars(&self, symbol: &str, limit: usize) -> Result<Vec<Bar>, EngineError>;

    /// Latest trade price.
    async fn get_quote(&self, symbol: &str) -> Result<f64, EngineError>;

    /// Display name for alert payloads. Defaults to the symbol itself.
    async fn get_name(&self, symbol: &str) -> Result<String, EngineError> {
        Ok(symbol.to_string())
    }
}

/// Stand-in provider wired up when no vendor is configured. Returns no
/// bars and a zero quote, which the scan loop treats as unavailable data.
pub struct PlaceholderMarketDataProvider;

#[async_trait]
impl MarketDataProvider for PlaceholderMarketDataProvider {
    async fn get_bars(&self, _symbol: &str, _limit: usize) -> Result<Vec<Bar>, EngineError> {
        Ok(Vec::new())
    }

    async fn get_quote(&self, _symbol: &str) -> Result<f64, EngineError> {
        Ok(0.0)
    }
}
