//! Unit tests for VWAP and relative volume

use alertix::indicators::volume::{relative_volume, vwap, VOLUME_MEAN_WINDOW};
use alertix::models::Bar;
use chrono::Utc;

fn bar(high: f64, low: f64, close: f64, volume: f64) -> Bar {
    Bar::new(Utc::now(), close, high, low, close, volume)
}

#[test]
fn vwap_single_bar_is_typical_price() {
    let bars = vec![bar(11.0, 9.0, 10.0, 500.0)];
    let out = vwap(&bars);
    assert_eq!(out, vec![10.0]);
}

#[test]
fn vwap_weights_by_volume() {
    // Typical prices 10 and 20, volumes 100 and 300.
    let bars = vec![bar(11.0, 9.0, 10.0, 100.0), bar(21.0, 19.0, 20.0, 300.0)];
    let out = vwap(&bars);
    assert_eq!(out[1], (10.0 * 100.0 + 20.0 * 300.0) / 400.0);
}

#[test]
fn vwap_is_nan_until_volume_appears() {
    let bars = vec![bar(11.0, 9.0, 10.0, 0.0), bar(11.0, 9.0, 10.0, 200.0)];
    let out = vwap(&bars);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 10.0);
}

#[test]
fn relative_volume_of_flat_series_is_one() {
    let volumes = vec![100.0; VOLUME_MEAN_WINDOW];
    assert_eq!(relative_volume(&volumes), Some(1.0));
}

#[test]
fn relative_volume_spike() {
    let mut volumes = vec![100.0; VOLUME_MEAN_WINDOW];
    volumes.push(200.0);
    // Mean over the last 20 samples includes the spike: (19*100 + 200)/20.
    let expected = 200.0 / 105.0;
    let ratio = relative_volume(&volumes).unwrap();
    assert!((ratio - expected).abs() < 1e-12);
}

#[test]
fn relative_volume_none_during_warm_up() {
    assert_eq!(relative_volume(&[100.0; 10]), None);
    assert_eq!(relative_volume(&[]), None);
}

#[test]
fn relative_volume_none_when_mean_is_zero() {
    assert_eq!(relative_volume(&[0.0; VOLUME_MEAN_WINDOW]), None);
}
