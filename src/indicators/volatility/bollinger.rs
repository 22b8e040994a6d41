//! Bollinger Bands indicator.

use crate::error::EngineError;
use crate::indicators::math;

/// Upper/middle/lower band series, aligned to the input.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Compute Bollinger Bands.
///
/// Middle = SMA(window)
/// Upper/Lower = Middle ± num_std × sample stddev(window)
///
/// Warm-up slots are NaN in all three series.
pub fn bollinger(
    series: &[f64],
    window: usize,
    num_std: f64,
) -> Result<BollingerBands, EngineError> {
    if window < 2 || series.len() < window {
        return Err(EngineError::InsufficientData {
            have: series.len(),
            need: window.max(2),
        });
    }

    let middle = math::rolling_mean(series, window);
    let std = math::rolling_stddev(series, window);
    let upper: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m + num_std * s)
        .collect();
    let lower: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m - num_std * s)
        .collect();

    Ok(BollingerBands {
        upper,
        middle,
        lower,
    })
}
