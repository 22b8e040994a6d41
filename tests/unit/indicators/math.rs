//! Unit tests for the shared rolling/exponential helpers

use alertix::indicators::math::{ema, last_rolling_mean, rolling_mean, rolling_stddev};

#[test]
fn ema_is_seeded_from_first_sample() {
    let series = vec![10.0, 10.0, 10.0];
    let out = ema(&series, 5);
    assert_eq!(out, vec![10.0, 10.0, 10.0]);
}

#[test]
fn ema_moves_toward_new_values() {
    let series = vec![10.0, 20.0];
    // alpha = 2 / (3 + 1) = 0.5
    let out = ema(&series, 3);
    assert_eq!(out[1], 15.0);
}

#[test]
fn ema_empty_series() {
    assert!(ema(&[], 5).is_empty());
}

#[test]
fn rolling_mean_warm_up_is_nan() {
    let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert_eq!(out[2], 2.0);
    assert_eq!(out[3], 3.0);
}

#[test]
fn rolling_mean_window_larger_than_series() {
    let out = rolling_mean(&[1.0, 2.0], 5);
    assert!(out.iter().all(|v| v.is_nan()));
}

#[test]
fn rolling_stddev_uses_sample_variance() {
    // stddev of [1, 2, 3] with ddof=1 is 1.0
    let out = rolling_stddev(&[1.0, 2.0, 3.0], 3);
    assert!(out[1].is_nan());
    assert!((out[2] - 1.0).abs() < 1e-12);
}

#[test]
fn rolling_stddev_constant_series_is_zero() {
    let out = rolling_stddev(&[5.0; 10], 4);
    assert_eq!(out[9], 0.0);
}

#[test]
fn last_rolling_mean_requires_full_window() {
    assert_eq!(last_rolling_mean(&[1.0, 2.0], 3), None);
    assert_eq!(last_rolling_mean(&[1.0, 2.0, 3.0], 3), Some(2.0));
}
