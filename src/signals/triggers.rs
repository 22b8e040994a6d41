//! Trigger set and composite decision types.

use serde::{Deserialize, Serialize};

/// The indicators a policy can enable, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Rsi,
    Macd,
    Bollinger,
    Volume,
    Vwap,
    RsiSlope,
    MacdHistogram,
    News,
}

/// One enabled indicator's boolean outcome for a single evaluation.
///
/// `label` is the human-readable display entry, present only when the
/// trigger fired (directional for RSI, annotated for volume/VWAP).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trigger {
    pub indicator: IndicatorKind,
    pub fired: bool,
    pub label: Option<String>,
}

impl Trigger {
    pub fn quiet(indicator: IndicatorKind) -> Self {
        Self {
            indicator,
            fired: false,
            label: None,
        }
    }

    pub fn fired(indicator: IndicatorKind, label: impl Into<String>) -> Self {
        Self {
            indicator,
            fired: true,
            label: Some(label.into()),
        }
    }
}

/// Ordered trigger outcomes, one per enabled indicator. Derived per
/// evaluation, never persisted.
pub type TriggerSet = Vec<Trigger>;

/// The composite outcome of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub fires: bool,
    pub triggers: TriggerSet,
    /// Display strings of the fired triggers; populated only when the
    /// decision fires.
    pub display: Vec<String>,
    pub fired_count: usize,
    pub required: usize,
    pub last_price: f64,
    pub vwap: Option<f64>,
    pub vwap_diff: Option<f64>,
}
