//! News snapshots for the optional headline trigger.
//!
//! The evaluator never fetches news itself; the scan loop hands it a
//! pre-fetched snapshot so evaluation stays pure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Headlines (and an optional sentiment score) fetched for one symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsSnapshot {
    pub headlines: Vec<String>,
    /// Aggregate sentiment in [-1, 1] when the provider supplies one.
    pub sentiment: Option<f64>,
}

impl NewsSnapshot {
    /// Whether this snapshot counts as a news trigger: a sentiment score
    /// beyond the neutral band, or any headline at all when the provider
    /// gives no score.
    pub fn triggered(&self) -> bool {
        match self.sentiment {
            Some(score) => score.abs() > 0.2,
            None => !self.headlines.is_empty(),
        }
    }
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn get_news(&self, symbol: &str) -> Result<NewsSnapshot, EngineError>;
}

/// No-op provider for environments without a news feed.
pub struct PlaceholderNewsProvider;

#[async_trait]
impl NewsProvider for PlaceholderNewsProvider {
    async fn get_news(&self, _symbol: &str) -> Result<NewsSnapshot, EngineError> {
        Ok(NewsSnapshot::default())
    }
}
