//! Unit tests for Wilder RSI

use pentrix::indicators::momentum::rsi::{wilder_rsi, wilder_rsi_default, DEFAULT_RSI_PERIOD};

#[test]
fn test_rsi_known_fixture() {
    let closes = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
        45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];
    let rsi = wilder_rsi_default(&closes).unwrap();
    assert!((rsi - 57.915).abs() < 0.01, "got {rsi}");
}

#[test]
fn test_rsi_strictly_increasing_is_100() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    assert_eq!(wilder_rsi_default(&closes), Some(100.0));
}

#[test]
fn test_rsi_strictly_decreasing_is_low() {
    let closes: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
    let rsi = wilder_rsi_default(&closes).unwrap();
    assert!(rsi < 1.0, "got {rsi}");
}

#[test]
fn test_rsi_insufficient_data() {
    let closes: Vec<f64> = (0..DEFAULT_RSI_PERIOD).map(|i| i as f64).collect();
    assert!(wilder_rsi_default(&closes).is_none());
}

#[test]
fn test_rsi_bounds() {
    let closes = [
        10.0, 12.0, 9.0, 14.0, 8.0, 15.0, 11.0, 13.0, 10.5, 12.5, 9.5, 14.5, 8.5, 15.5, 11.5,
        13.5, 10.0, 12.0,
    ];
    let rsi = wilder_rsi(&closes, 14).unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_rsi_zero_period() {
    assert!(wilder_rsi(&[1.0, 2.0, 3.0], 0).is_none());
}
