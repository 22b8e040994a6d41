//! Unit tests for Bollinger Bands

use alertix::indicators::bollinger::bollinger;
use alertix::EngineError;

#[test]
fn bands_collapse_on_constant_series() {
    let series = vec![50.0; 30];
    let bands = bollinger(&series, 20, 2.0).unwrap();
    let n = series.len();
    assert_eq!(bands.middle[n - 1], 50.0);
    assert_eq!(bands.upper[n - 1], 50.0);
    assert_eq!(bands.lower[n - 1], 50.0);
}

#[test]
fn bands_are_symmetric_around_middle() {
    let series: Vec<f64> = (0..30).map(|i| 100.0 + (i % 4) as f64).collect();
    let bands = bollinger(&series, 20, 2.0).unwrap();
    let n = series.len();
    let up = bands.upper[n - 1] - bands.middle[n - 1];
    let down = bands.middle[n - 1] - bands.lower[n - 1];
    assert!((up - down).abs() < 1e-12);
    assert!(up > 0.0);
}

#[test]
fn bands_warm_up_is_nan() {
    let series: Vec<f64> = (0..25).map(|i| i as f64).collect();
    let bands = bollinger(&series, 20, 2.0).unwrap();
    assert!(bands.upper[18].is_nan());
    assert!(!bands.upper[19].is_nan());
}

#[test]
fn bollinger_insufficient_data() {
    let err = bollinger(&[1.0; 10], 20, 2.0).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientData { .. }));
    assert!(bollinger(&[1.0; 10], 1, 2.0).is_err());
}
