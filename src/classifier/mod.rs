//! Signal classification: runs the stage chain with short-circuiting.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analysis::{HeadlineScorer, OptionsFlowConfig, SrConfig};
use crate::filters::{
    ChartTechnicalFilter, MarketAssessment, NewsSentimentFilter, OptionsFilter, SupportFilter,
    SymbolFilter, SymbolSnapshot,
};
use crate::models::{SignalRecord, SignalType, StageOutcome, StageVerdict};

/// Stage name of the cycle-wide market gate in the persisted filter map.
pub const MARKET_STAGE: &str = "market";

/// Ordered chain of per-symbol stages.
pub struct FilterSet {
    stages: Vec<Arc<dyn SymbolFilter>>,
}

impl FilterSet {
    pub fn new(stages: Vec<Arc<dyn SymbolFilter>>) -> Self {
        Self { stages }
    }

    /// The production chain: chart, news, options, support.
    pub fn standard(scorer: Arc<dyn HeadlineScorer>) -> Self {
        Self::new(vec![
            Arc::new(ChartTechnicalFilter),
            Arc::new(NewsSentimentFilter::new(scorer)),
            Arc::new(OptionsFilter::new(OptionsFlowConfig::default())),
            Arc::new(SupportFilter::new(SrConfig::default())),
        ])
    }

    pub fn stages(&self) -> &[Arc<dyn SymbolFilter>] {
        &self.stages
    }
}

/// Walks a [`FilterSet`] for one symbol under one cycle-wide market verdict.
///
/// Evaluation stops at the first failing stage; the remaining stages are
/// recorded as not evaluated, and only a fully passing chain yields StrongBuy.
pub struct SignalClassifier {
    filters: FilterSet,
}

impl SignalClassifier {
    pub fn new(filters: FilterSet) -> Self {
        Self { filters }
    }

    pub fn classify(&self, snapshot: &SymbolSnapshot, market: &MarketAssessment) -> SignalRecord {
        let mut outcomes = Vec::with_capacity(self.filters.stages.len() + 1);

        if market.blocked {
            outcomes.push(StageOutcome::new(
                MARKET_STAGE,
                StageVerdict::Fail,
                market.reason.clone(),
            ));
            for stage in &self.filters.stages {
                outcomes.push(StageOutcome::not_evaluated(stage.name()));
            }
            info!(
                symbol = %snapshot.config.ticker,
                reason = %market.reason,
                "market gate blocked symbol"
            );
            return SignalRecord::new(
                &snapshot.config.ticker,
                SignalType::MarketBlock,
                snapshot.current_price,
                outcomes,
            );
        }
        outcomes.push(StageOutcome::new(
            MARKET_STAGE,
            StageVerdict::Pass,
            market.reason.clone(),
        ));

        let mut terminal: Option<SignalType> = None;
        let mut stages = self.filters.stages.iter();

        for stage in stages.by_ref() {
            let eval = stage.evaluate(snapshot);
            debug!(
                symbol = %snapshot.config.ticker,
                stage = stage.name(),
                verdict = ?eval.verdict,
                reason = %eval.reason,
                "stage evaluated"
            );
            let failed = eval.verdict.blocks();
            outcomes.push(StageOutcome::new(stage.name(), eval.verdict, eval.reason));
            if failed {
                terminal = Some(eval.on_fail);
                break;
            }
        }
        for skipped in stages {
            outcomes.push(StageOutcome::not_evaluated(skipped.name()));
        }

        let signal_type = terminal.unwrap_or(SignalType::StrongBuy);
        if signal_type == SignalType::StrongBuy {
            info!(
                symbol = %snapshot.config.ticker,
                price = snapshot.current_price,
                "all stages passed"
            );
        }

        SignalRecord::new(
            &snapshot.config.ticker,
            signal_type,
            snapshot.current_price,
            outcomes,
        )
    }
}
