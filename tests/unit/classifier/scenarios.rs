//! Unit tests for the classification chain

use crate::common_series::{overbought_bounce_closes, oversold_pullback_closes, series_from_closes};
use chrono::{Duration, NaiveDate};
use pentrix::analysis::HeadlineScorer;
use pentrix::classifier::{FilterSet, SignalClassifier, MARKET_STAGE};
use pentrix::error::DataError;
use pentrix::filters::{
    MarketAssessment, StageEvaluation, SymbolFilter, SymbolSnapshot,
};
use pentrix::models::{
    ExpirationChain, MarketRegimeState, OptionContract, OptionsSnapshot, SignalType, StageVerdict,
    SymbolConfig, VolatilityBucket,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FixedScorer(f64);

impl HeadlineScorer for FixedScorer {
    fn compound(&self, _headline: &str) -> Result<f64, DataError> {
        Ok(self.0)
    }
}

/// Counts calls and returns a fixed evaluation.
struct SpyFilter {
    name: &'static str,
    verdict: StageVerdict,
    calls: Arc<AtomicUsize>,
}

impl SpyFilter {
    fn new(name: &'static str, verdict: StageVerdict) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = Arc::new(Self { name, verdict, calls: calls.clone() });
        (spy, calls)
    }
}

impl SymbolFilter for SpyFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, _snapshot: &SymbolSnapshot) -> StageEvaluation {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StageEvaluation {
            verdict: self.verdict,
            reason: "spy".to_string(),
            on_fail: SignalType::Hold,
        }
    }
}

fn favorable_market() -> MarketAssessment {
    MarketAssessment {
        blocked: false,
        regime: Some(MarketRegimeState::Safe),
        reason: "market favorable".to_string(),
    }
}

fn blocked_market() -> MarketAssessment {
    MarketAssessment {
        blocked: true,
        regime: Some(MarketRegimeState::Downtrend),
        reason: "market unfavorable".to_string(),
    }
}

/// Call-heavy chain struck around the pullback fixture's 136.5 close. The
/// fixture's vol proxy spans roughly [0.00, 0.22], so `atm_iv` 0.05 ranks
/// cheap and 0.9 clamps to 100.
fn call_heavy_options(atm_iv: f64) -> OptionsSnapshot {
    let expires_on = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap() + Duration::days(37);
    let contract = |strike: f64, volume: f64, oi: f64, last: f64| OptionContract {
        strike,
        volume,
        open_interest: oi,
        implied_volatility: atm_iv,
        last_price: last,
    };
    let chain = ExpirationChain {
        expires_on,
        calls: vec![contract(135.0, 2500.0, 500.0, 5.0), contract(140.0, 500.0, 100.0, 2.0)],
        puts: vec![contract(130.0, 600.0, 2000.0, 1.5), contract(125.0, 300.0, 1500.0, 1.0)],
    };
    OptionsSnapshot::new("NVDA", vec![chain])
}

fn snapshot_from_closes(closes: &[f64]) -> SymbolSnapshot {
    let series = series_from_closes(closes);
    let current_price = series.last_close().unwrap_or(0.0);
    SymbolSnapshot {
        config: SymbolConfig::new("NVDA", VolatilityBucket::Medium),
        series,
        current_price,
        headlines: Vec::new(),
        options: None,
        as_of: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
    }
}

#[test]
fn test_blocked_market_short_circuits_everything() {
    let (spy_a, calls_a) = SpyFilter::new("chart", StageVerdict::Pass);
    let (spy_b, calls_b) = SpyFilter::new("news", StageVerdict::Pass);
    let classifier = SignalClassifier::new(FilterSet::new(vec![spy_a, spy_b]));

    let record = classifier.classify(&snapshot_from_closes(&[100.0]), &blocked_market());

    assert_eq!(record.signal_type, SignalType::MarketBlock);
    assert_eq!(calls_a.load(Ordering::SeqCst), 0);
    assert_eq!(calls_b.load(Ordering::SeqCst), 0);
    assert_eq!(record.outcome(MARKET_STAGE).unwrap().verdict, StageVerdict::Fail);
    assert_eq!(record.outcome("chart").unwrap().verdict, StageVerdict::NotEvaluated);
    assert_eq!(record.outcome("news").unwrap().verdict, StageVerdict::NotEvaluated);
}

#[test]
fn test_first_failure_stops_later_stages() {
    let (pass, pass_calls) = SpyFilter::new("chart", StageVerdict::Pass);
    let (fail, fail_calls) = SpyFilter::new("news", StageVerdict::Fail);
    let (never, never_calls) = SpyFilter::new("options", StageVerdict::Pass);
    let classifier = SignalClassifier::new(FilterSet::new(vec![pass, fail, never]));

    let record = classifier.classify(&snapshot_from_closes(&[100.0]), &favorable_market());

    assert_eq!(pass_calls.load(Ordering::SeqCst), 1);
    assert_eq!(fail_calls.load(Ordering::SeqCst), 1);
    assert_eq!(never_calls.load(Ordering::SeqCst), 0);
    assert_eq!(record.signal_type, SignalType::Hold);
    assert_eq!(record.outcome("options").unwrap().verdict, StageVerdict::NotEvaluated);
    // The skipped stage still shows up as "pass" in the persisted map.
    assert_eq!(record.filter_map()["options"], "pass");
}

#[test]
fn test_all_stages_passing_yields_strong_buy() {
    let (a, _) = SpyFilter::new("chart", StageVerdict::Pass);
    let (b, _) = SpyFilter::new("news", StageVerdict::Pass);
    let classifier = SignalClassifier::new(FilterSet::new(vec![a, b]));

    let record = classifier.classify(&snapshot_from_closes(&[100.0]), &favorable_market());

    assert_eq!(record.signal_type, SignalType::StrongBuy);
    assert!(record.outcomes.iter().all(|o| o.verdict == StageVerdict::Pass));
}

#[test]
fn test_oversold_pullback_sweeps_standard_chain() {
    // Oversold RSI in a golden trend, neutral news, cheap call-heavy options,
    // entry 2.25% above support: every stage passes on its own merits.
    let classifier =
        SignalClassifier::new(FilterSet::standard(Arc::new(FixedScorer(0.1))));
    let mut snapshot = snapshot_from_closes(&oversold_pullback_closes());
    snapshot.options = Some(call_heavy_options(0.05));
    let record = classifier.classify(&snapshot, &favorable_market());

    assert_eq!(record.signal_type, SignalType::StrongBuy);
    assert_eq!(record.entry_price, 136.5);
    let filters = record.filter_map();
    for stage in [MARKET_STAGE, "chart", "news", "options", "support"] {
        assert_eq!(filters[stage], "pass", "stage {stage}");
    }
}

#[test]
fn test_rich_premium_parks_in_options_wait() {
    // Same bullish setup, but ATM IV at 0.9 ranks 100 against the proxy.
    let classifier =
        SignalClassifier::new(FilterSet::standard(Arc::new(FixedScorer(0.1))));
    let mut snapshot = snapshot_from_closes(&oversold_pullback_closes());
    snapshot.options = Some(call_heavy_options(0.9));
    let record = classifier.classify(&snapshot, &favorable_market());

    assert_eq!(record.signal_type, SignalType::OptionsWait);
    let filters = record.filter_map();
    assert_eq!(filters["chart"], "pass");
    assert_eq!(filters["news"], "pass");
    assert_eq!(filters["options"], "fail");
    // The skipped support stage persists as non-blocking.
    assert_eq!(filters["support"], "pass");
}

#[test]
fn test_extended_entry_parks_in_support_wait() {
    // Cheap bullish options, but price has run 8.6% above the 133.5 support.
    let classifier =
        SignalClassifier::new(FilterSet::standard(Arc::new(FixedScorer(0.1))));
    let mut snapshot = snapshot_from_closes(&oversold_pullback_closes());
    snapshot.options = Some(call_heavy_options(0.05));
    snapshot.current_price = 145.0;
    let record = classifier.classify(&snapshot, &favorable_market());

    assert_eq!(record.signal_type, SignalType::SupportWait);
    let filters = record.filter_map();
    assert_eq!(filters["options"], "pass");
    assert_eq!(filters["support"], "fail");
}

#[test]
fn test_overbought_bounce_sells_through_standard_chain() {
    let classifier =
        SignalClassifier::new(FilterSet::standard(Arc::new(FixedScorer(0.1))));
    let record = classifier.classify(
        &snapshot_from_closes(&overbought_bounce_closes()),
        &favorable_market(),
    );

    assert_eq!(record.signal_type, SignalType::Sell);
    let filters = record.filter_map();
    assert_eq!(filters["chart"], "fail");
    // Later stages were skipped but persist as non-blocking.
    assert_eq!(filters["news"], "pass");
    assert_eq!(filters["support"], "pass");
}

#[test]
fn test_negative_news_blocks_after_chart_passes() {
    let classifier =
        SignalClassifier::new(FilterSet::standard(Arc::new(FixedScorer(-0.9))));
    let mut snapshot = snapshot_from_closes(&oversold_pullback_closes());
    snapshot.headlines = vec!["disaster".to_string()];
    let record = classifier.classify(&snapshot, &favorable_market());

    assert_eq!(record.signal_type, SignalType::NewsBlock);
    let filters = record.filter_map();
    assert_eq!(filters["chart"], "pass");
    assert_eq!(filters["news"], "fail");
}

#[test]
fn test_record_always_covers_every_stage() {
    let (a, _) = SpyFilter::new("chart", StageVerdict::Fail);
    let (b, _) = SpyFilter::new("news", StageVerdict::Pass);
    let classifier = SignalClassifier::new(FilterSet::new(vec![a, b]));

    let record = classifier.classify(&snapshot_from_closes(&[100.0]), &favorable_market());
    let stages: Vec<&str> = record.outcomes.iter().map(|o| o.stage.as_str()).collect();
    assert_eq!(stages, vec![MARKET_STAGE, "chart", "news"]);
}
