//! Unit tests for SMA and the MA trend state

use pentrix::indicators::trend::sma::{ma_trend, sma};

#[test]
fn test_sma_last_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(sma(&values, 3), Some(5.0));
}

#[test]
fn test_sma_insufficient_data() {
    assert!(sma(&[1.0, 2.0], 3).is_none());
}

#[test]
fn test_ma_trend_golden_is_level_comparison() {
    // Fast above slow purely on current levels, no crossover edge needed.
    let values: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let trend = ma_trend(&values, 20, 60).unwrap();
    assert!(trend.golden());

    let falling: Vec<f64> = (0..60).map(|i| 160.0 - i as f64).collect();
    let trend = ma_trend(&falling, 20, 60).unwrap();
    assert!(!trend.golden());
}

#[test]
fn test_ma_trend_needs_slow_window() {
    let values: Vec<f64> = (0..59).map(|i| i as f64).collect();
    assert!(ma_trend(&values, 20, 60).is_none());
}
