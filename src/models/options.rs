//! Options chain snapshot and derived metrics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One listed contract (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub volume: f64,
    pub open_interest: f64,
    pub implied_volatility: f64,
    pub last_price: f64,
}

/// All contracts for one expiration date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationChain {
    pub expires_on: NaiveDate,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

/// Point-in-time snapshot of a symbol's option chain, expirations ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsSnapshot {
    pub symbol: String,
    pub expirations: Vec<ExpirationChain>,
}

impl OptionsSnapshot {
    pub fn new(symbol: impl Into<String>, mut expirations: Vec<ExpirationChain>) -> Self {
        expirations.sort_by_key(|e| e.expires_on);
        Self { symbol: symbol.into(), expirations }
    }

    pub fn is_empty(&self) -> bool {
        self.expirations.is_empty()
    }
}

/// Directional read of unusual options activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowSignal {
    Bullish,
    Bearish,
    Neutral,
}

/// Coarse IV-rank bucket, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IvStatus {
    Low,
    Medium,
    High,
}

impl IvStatus {
    pub fn from_rank(iv_rank: f64) -> Self {
        if iv_rank < 30.0 {
            Self::Low
        } else if iv_rank < 70.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Everything the options stage derives from one chain snapshot.
///
/// `iv_rank`/`iv_percentile` are computed against a realized-volatility proxy
/// for historical IV, not a true historical IV feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsMetrics {
    pub current_iv: f64,
    pub iv_rank: f64,
    pub iv_percentile: f64,
    pub iv_status: IvStatus,
    pub flow_signal: FlowSignal,
    pub confidence: f64,
    pub put_call_ratio: f64,
    /// Human-readable notes accumulated while scoring the flow.
    pub flow_notes: Vec<String>,
}
