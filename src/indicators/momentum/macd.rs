//! MACD (Moving Average Convergence Divergence) indicator.

use crate::indicators::math;

/// Compute the MACD and signal line for the given price series.
///
/// macd_line = EMA(fast) - EMA(slow)
/// signal_line = EMA(macd_line, signal)
///
/// Both series are the same length as the input and defined from the
/// first sample (EMAs are seeded, not windowed); callers wanting a
/// settled value should supply enough history for the slow EMA to
/// converge.
pub fn macd(series: &[f64], fast: usize, slow: usize, signal: usize) -> (Vec<f64>, Vec<f64>) {
    let ema_fast = math::ema(series, fast);
    let ema_slow = math::ema(series, slow);
    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal_line = math::ema(&macd_line, signal);
    (macd_line, signal_line)
}

/// MACD with the default 12/26/9 parameters.
pub fn macd_default(series: &[f64]) -> (Vec<f64>, Vec<f64>) {
    macd(series, 12, 26, 9)
}
