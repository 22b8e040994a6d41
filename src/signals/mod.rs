//! Signal evaluation interfaces.

pub mod evaluator;
pub mod triggers;

pub use evaluator::SignalEvaluator;
pub use triggers::{Decision, IndicatorKind, Trigger, TriggerSet};
