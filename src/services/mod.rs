//! External-facing services: market data, news, and alert delivery.

pub mod alert_sink;
pub mod market_data;
pub mod news;

pub use alert_sink::{AlertSink, LogAlertSink, WebhookAlertSink};
pub use market_data::{MarketDataProvider, PlaceholderMarketDataProvider};
pub use news::{NewsProvider, NewsSnapshot, PlaceholderNewsProvider};
