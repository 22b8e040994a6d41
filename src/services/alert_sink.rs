//! Alert delivery.
//!
//! `LogAlertSink` is the default and always available; `WebhookAlertSink`
//! POSTs the alert as JSON to a configured endpoint.

use async_trait::async_trait;
use tracing::info;

use crate::error::EngineError;
use crate::models::Alert;

#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn emit(&self, alert: &Alert) -> Result<(), EngineError>;
}

/// Writes alerts to the structured log.
pub struct LogAlertSink;

#[async_trait]
impl AlertSink for LogAlertSink {
    async fn emit(&self, alert: &Alert) -> Result<(), EngineError> {
        info!(
            symbol = %alert.symbol,
            price = alert.price,
            triggers = %alert.triggers,
            "Alert: {} @ {:.2} [{}]",
            alert.symbol,
            alert.price,
            alert.triggers
        );
        Ok(())
    }
}

/// POSTs each alert as a JSON body to a webhook endpoint.
pub struct WebhookAlertSink {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookAlertSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AlertSink for WebhookAlertSink {
    async fn emit(&self, alert: &Alert) -> Result<(), EngineError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(alert)
            .send()
            .await
            .map_err(|e| EngineError::AlertDelivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EngineError::AlertDelivery(format!(
                "webhook returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
