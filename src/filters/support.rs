//! Support stage: entry must sit close to a detected support level.

use tracing::debug;

use crate::analysis::{SrConfig, SupportResistanceDetector};
use crate::filters::{StageEvaluation, SymbolFilter, SymbolSnapshot};
use crate::models::SignalType;

const MAX_DISTANCE_PCT: f64 = 3.0;

/// Fails when price is extended more than 3% above the nearest support.
/// With no support below price the stage passes through.
#[derive(Debug, Clone, Copy)]
pub struct SupportFilter {
    config: SrConfig,
}

impl SupportFilter {
    pub fn new(config: SrConfig) -> Self {
        Self { config }
    }
}

impl Default for SupportFilter {
    fn default() -> Self {
        Self::new(SrConfig::default())
    }
}

impl SymbolFilter for SupportFilter {
    fn name(&self) -> &'static str {
        "support"
    }

    fn evaluate(&self, snapshot: &SymbolSnapshot) -> StageEvaluation {
        let detector = SupportResistanceDetector::from_series(&snapshot.series, self.config);
        let check = detector.support_proximity(snapshot.current_price, MAX_DISTANCE_PCT);

        debug!(
            symbol = %snapshot.config.ticker,
            supports = detector.supports().len(),
            nearest = ?check.nearest_support,
            distance_pct = ?check.distance_pct,
            "support stage computed"
        );

        if check.passed {
            StageEvaluation::pass(check.reason, SignalType::SupportWait)
        } else {
            StageEvaluation::fail(check.reason, SignalType::SupportWait)
        }
    }
}
