//! Unit tests for signal record shaping

use pentrix::models::{SignalRecord, SignalType, StageOutcome, StageVerdict};

fn outcomes() -> Vec<StageOutcome> {
    vec![
        StageOutcome::new("market", StageVerdict::Pass, "favorable"),
        StageOutcome::new("chart", StageVerdict::Fail, "overbought"),
        StageOutcome::not_evaluated("news"),
    ]
}

#[test]
fn test_entry_price_sanitized() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -5.0] {
        let record = SignalRecord::new("NVDA", SignalType::Sell, bad, outcomes());
        assert_eq!(record.entry_price, 0.0);
    }
    let record = SignalRecord::new("NVDA", SignalType::Sell, 123.45, outcomes());
    assert_eq!(record.entry_price, 123.45);
}

#[test]
fn test_not_evaluated_collapses_to_pass_in_store_shape() {
    let record = SignalRecord::new("NVDA", SignalType::Sell, 100.0, outcomes());
    let filters = record.filter_map();
    assert_eq!(filters["market"], "pass");
    assert_eq!(filters["chart"], "fail");
    assert_eq!(filters["news"], "pass");
}

#[test]
fn test_stored_shape_uses_snake_case_labels() {
    let record = SignalRecord::new("NVDA", SignalType::StrongBuy, 100.0, vec![]);
    let stored = record.to_stored();
    assert_eq!(stored.signal_type, "strong_buy");
    // RFC 3339 timestamp string.
    assert!(stored.created_at.contains('T'));
}

#[test]
fn test_outcome_lookup_by_stage() {
    let record = SignalRecord::new("NVDA", SignalType::Sell, 100.0, outcomes());
    assert_eq!(record.outcome("chart").unwrap().verdict, StageVerdict::Fail);
    assert!(record.outcome("options").is_none());
}

#[test]
fn test_verdict_blocking() {
    assert!(StageVerdict::Fail.blocks());
    assert!(!StageVerdict::Pass.blocks());
    assert!(!StageVerdict::NotEvaluated.blocks());
}
