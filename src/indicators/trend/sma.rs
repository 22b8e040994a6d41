//! Simple moving average.

use crate::error::EngineError;
use crate::indicators::math;

/// Mean of the last `length` samples.
pub fn sma(series: &[f64], length: usize) -> Result<f64, EngineError> {
    if length == 0 || series.len() < length {
        return Err(EngineError::InsufficientData {
            have: series.len(),
            need: length.max(1),
        });
    }
    let sum: f64 = series[series.len() - length..].iter().sum();
    Ok(sum / length as f64)
}

/// Full SMA series aligned to the input, NaN during warm-up.
pub fn sma_series(series: &[f64], length: usize) -> Vec<f64> {
    math::rolling_mean(series, length)
}
