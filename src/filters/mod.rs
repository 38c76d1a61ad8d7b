//! Per-symbol filter stages.
//!
//! Each stage implements [`SymbolFilter`] and reads only the shared
//! [`SymbolSnapshot`]; stages are independent and the classifier owns ordering
//! and short-circuiting.

pub mod chart_technical;
pub mod market_regime;
pub mod news_sentiment;
pub mod options;
pub mod support;

pub use chart_technical::ChartTechnicalFilter;
pub use market_regime::{MarketAssessment, MarketRegimeConfig, MarketRegimeFilter};
pub use news_sentiment::NewsSentimentFilter;
pub use options::OptionsFilter;
pub use support::SupportFilter;

use chrono::NaiveDate;

use crate::models::{OptionsSnapshot, PriceSeries, SignalType, StageVerdict, SymbolConfig};

/// Everything fetched for one symbol in one cycle, assembled once and shared
/// read-only across stages.
#[derive(Debug, Clone)]
pub struct SymbolSnapshot {
    pub config: SymbolConfig,
    pub series: PriceSeries,
    pub current_price: f64,
    pub headlines: Vec<String>,
    /// None when the chain fetch failed or the symbol has no listed options.
    pub options: Option<OptionsSnapshot>,
    pub as_of: NaiveDate,
}

/// What a stage reports back to the classifier.
#[derive(Debug, Clone)]
pub struct StageEvaluation {
    pub verdict: StageVerdict,
    pub reason: String,
    /// Terminal signal the classifier emits if this stage failed.
    pub on_fail: SignalType,
}

impl StageEvaluation {
    pub fn pass(reason: impl Into<String>, on_fail: SignalType) -> Self {
        Self { verdict: StageVerdict::Pass, reason: reason.into(), on_fail }
    }

    pub fn fail(reason: impl Into<String>, on_fail: SignalType) -> Self {
        Self { verdict: StageVerdict::Fail, reason: reason.into(), on_fail }
    }
}

/// One stage of the classification chain.
pub trait SymbolFilter: Send + Sync {
    /// Stable stage name, used as the key in the persisted filter map.
    fn name(&self) -> &'static str;

    fn evaluate(&self, snapshot: &SymbolSnapshot) -> StageEvaluation;
}
