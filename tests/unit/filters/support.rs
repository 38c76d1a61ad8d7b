//! Unit tests for the support stage

use crate::common_series::{oversold_pullback_closes, series_from_closes};
use chrono::NaiveDate;
use pentrix::filters::{SupportFilter, SymbolFilter, SymbolSnapshot};
use pentrix::models::{SignalType, StageVerdict, SymbolConfig, VolatilityBucket};

fn snapshot_at(closes: &[f64], current_price: f64) -> SymbolSnapshot {
    SymbolSnapshot {
        config: SymbolConfig::new("TEST", VolatilityBucket::Medium),
        series: series_from_closes(closes),
        current_price,
        headlines: Vec::new(),
        options: None,
        as_of: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
    }
}

#[test]
fn test_entry_near_support_passes() {
    // 136.5 sits 2.25% above the 133.5 support.
    let snapshot = snapshot_at(&oversold_pullback_closes(), 136.5);
    let eval = SupportFilter::default().evaluate(&snapshot);
    assert_eq!(eval.verdict, StageVerdict::Pass);
    assert!(eval.reason.contains("near support"));
}

#[test]
fn test_extended_entry_fails_to_support_wait() {
    // 145.0 is 8.6% above the 133.5 support, past the 3% band.
    let snapshot = snapshot_at(&oversold_pullback_closes(), 145.0);
    let eval = SupportFilter::default().evaluate(&snapshot);
    assert_eq!(eval.verdict, StageVerdict::Fail);
    assert_eq!(eval.on_fail, SignalType::SupportWait);
    assert!(eval.reason.contains("extended"));
}

#[test]
fn test_no_support_below_passes_through() {
    let rising: Vec<f64> = (0..200).map(|i| 100.0 + 0.5 * i as f64).collect();
    let snapshot = snapshot_at(&rising, 200.0);
    let eval = SupportFilter::default().evaluate(&snapshot);
    assert_eq!(eval.verdict, StageVerdict::Pass);
    assert!(eval.reason.contains("no support"));
}
