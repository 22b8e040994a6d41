//! Rolling-window and exponential-average helpers shared by the indicators.
//!
//! All series-returning functions are aligned to the input: warm-up slots
//! are NaN, the last element corresponds to the last input sample.

/// Exponential moving average with span semantics: alpha = 2 / (span + 1),
/// seeded from the first sample.
pub fn ema(series: &[f64], span: usize) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(series.len());
    let mut prev = series[0];
    out.push(prev);
    for &value in &series[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// Rolling mean over `window` samples; NaN until the window fills.
pub fn rolling_mean(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if window == 0 || n < window {
        return out;
    }
    let mut sum: f64 = series[..window].iter().sum();
    out[window - 1] = sum / window as f64;
    for i in window..n {
        sum += series[i] - series[i - window];
        out[i] = sum / window as f64;
    }
    out
}

/// Rolling sample standard deviation (ddof = 1) over `window` samples;
/// NaN until the window fills.
pub fn rolling_stddev(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if window < 2 || n < window {
        return out;
    }
    for i in (window - 1)..n {
        let slice = &series[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window as f64 - 1.0);
        out[i] = var.sqrt();
    }
    out
}

/// Last value of the rolling mean, if the window ever filled.
pub fn last_rolling_mean(series: &[f64], window: usize) -> Option<f64> {
    rolling_mean(series, window).last().copied().filter(|v| !v.is_nan())
}
