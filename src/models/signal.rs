//! Signal classification outcomes and the persisted record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminal classification of one symbol for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalType {
    StrongBuy,
    Sell,
    Hold,
    MarketBlock,
    NewsBlock,
    OptionsWait,
    SupportWait,
}

impl SignalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrongBuy => "strong_buy",
            Self::Sell => "sell",
            Self::Hold => "hold",
            Self::MarketBlock => "market_block",
            Self::NewsBlock => "news_block",
            Self::OptionsWait => "options_wait",
            Self::SupportWait => "support_wait",
        }
    }
}

/// Tri-state stage verdict.
///
/// `NotEvaluated` marks a stage skipped by short-circuiting. It is
/// non-blocking, and at the persistence boundary it collapses to `"pass"` to
/// match the legacy record shape ("did not block", not "was approved").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageVerdict {
    Pass,
    Fail,
    NotEvaluated,
}

impl StageVerdict {
    pub fn blocks(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Legacy two-state label used in the persisted filter map.
    pub fn store_label(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Pass | Self::NotEvaluated => "pass",
        }
    }
}

/// Outcome of one stage for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageOutcome {
    pub stage: String,
    pub verdict: StageVerdict,
    pub reason: String,
}

impl StageOutcome {
    pub fn new(stage: impl Into<String>, verdict: StageVerdict, reason: impl Into<String>) -> Self {
        Self { stage: stage.into(), verdict, reason: reason.into() }
    }

    pub fn not_evaluated(stage: impl Into<String>) -> Self {
        Self::new(stage, StageVerdict::NotEvaluated, "not evaluated")
    }
}

/// Broad-market regime, display label only; it does not by itself determine
/// whether the market stage blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketRegimeState {
    Safe,
    Downtrend,
    RateSpike,
    Crash,
}

impl MarketRegimeState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Downtrend => "Downtrend",
            Self::RateSpike => "Rate Spike",
            Self::Crash => "Crash",
        }
    }
}

/// Immutable classification record handed to the store and notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalRecord {
    pub ticker: String,
    pub signal_type: SignalType,
    pub entry_price: f64,
    pub outcomes: Vec<StageOutcome>,
    pub created_at: DateTime<Utc>,
}

impl SignalRecord {
    /// Builds a record, sanitizing the entry price: NaN, infinite, and
    /// negative prices all become 0.0.
    pub fn new(
        ticker: impl Into<String>,
        signal_type: SignalType,
        entry_price: f64,
        outcomes: Vec<StageOutcome>,
    ) -> Self {
        let entry_price = if entry_price.is_finite() && entry_price >= 0.0 {
            entry_price
        } else {
            0.0
        };
        Self {
            ticker: ticker.into(),
            signal_type,
            entry_price,
            outcomes,
            created_at: Utc::now(),
        }
    }

    pub fn outcome(&self, stage: &str) -> Option<&StageOutcome> {
        self.outcomes.iter().find(|o| o.stage == stage)
    }

    /// Legacy filter map: one `"pass"`/`"fail"` entry per stage.
    pub fn filter_map(&self) -> BTreeMap<String, String> {
        self.outcomes
            .iter()
            .map(|o| (o.stage.clone(), o.verdict.store_label().to_string()))
            .collect()
    }

    /// The shape written to the signal store.
    pub fn to_stored(&self) -> StoredSignal {
        StoredSignal {
            ticker: self.ticker.clone(),
            signal_type: self.signal_type.as_str().to_string(),
            entry_price: self.entry_price,
            filters: self.filter_map(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Persisted record shape: flat strings and a two-state filter map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSignal {
    pub ticker: String,
    pub signal_type: String,
    pub entry_price: f64,
    pub filters: BTreeMap<String, String>,
    pub created_at: String,
}
