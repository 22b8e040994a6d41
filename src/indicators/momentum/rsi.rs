//! RSI (Relative Strength Index) indicator.

use crate::error::EngineError;
use crate::indicators::math;

/// Compute the RSI series over `period` bars.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = rolling mean of gains / rolling mean of losses
///
/// Returned series is aligned to the input with NaN during warm-up
/// (the first `period` slots). When the average loss is zero, RSI
/// saturates at 100 rather than dividing by zero.
pub fn rsi(series: &[f64], period: usize) -> Result<Vec<f64>, EngineError> {
    if period == 0 || series.len() < period + 1 {
        return Err(EngineError::InsufficientData {
            have: series.len(),
            need: period + 1,
        });
    }

    let mut gains = vec![f64::NAN; series.len()];
    let mut losses = vec![f64::NAN; series.len()];
    for i in 1..series.len() {
        let change = series[i] - series[i - 1];
        gains[i] = change.max(0.0);
        losses[i] = (-change).max(0.0);
    }

    // Rolling means over the deltas; index 0 is NaN so the first valid
    // RSI lands at index `period`.
    let avg_gain = math::rolling_mean(&gains[1..], period);
    let avg_loss = math::rolling_mean(&losses[1..], period);

    let mut out = vec![f64::NAN; series.len()];
    for i in 0..avg_gain.len() {
        let (g, l) = (avg_gain[i], avg_loss[i]);
        if g.is_nan() || l.is_nan() {
            continue;
        }
        out[i + 1] = if l == 0.0 {
            100.0
        } else {
            100.0 - (100.0 / (1.0 + g / l))
        };
    }
    Ok(out)
}

/// Last RSI value for the default period (14).
pub fn rsi_last(series: &[f64]) -> Result<f64, EngineError> {
    let series = rsi(series, 14)?;
    Ok(*series.last().unwrap_or(&f64::NAN))
}
