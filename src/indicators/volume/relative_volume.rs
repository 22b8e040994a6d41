//! Relative volume against a 20-bar rolling mean.

use crate::indicators::math;

/// Window used for the baseline volume mean.
pub const VOLUME_MEAN_WINDOW: usize = 20;

/// Ratio of the latest volume to its rolling mean, or None while the
/// baseline window is still warming up (or the mean is zero).
pub fn relative_volume(volumes: &[f64]) -> Option<f64> {
    let current = *volumes.last()?;
    let mean = math::last_rolling_mean(volumes, VOLUME_MEAN_WINDOW)?;
    if mean <= 0.0 {
        return None;
    }
    Some(current / mean)
}
