//! Options stage: cheap volatility plus non-bearish flow.

use tracing::{debug, warn};

use crate::analysis::{OptionsFlowAnalyzer, OptionsFlowConfig};
use crate::filters::{StageEvaluation, SymbolFilter, SymbolSnapshot};
use crate::models::{FlowSignal, SignalType};

const MAX_IV_RANK: f64 = 30.0;

/// Passes when IV rank is low (options are cheap) and flow is not bearish.
/// A missing chain or failed analysis passes through: options data is an
/// enhancement, not a requirement.
#[derive(Debug, Clone, Default)]
pub struct OptionsFilter {
    analyzer: OptionsFlowAnalyzer,
}

impl OptionsFilter {
    pub fn new(config: OptionsFlowConfig) -> Self {
        Self { analyzer: OptionsFlowAnalyzer::new(config) }
    }
}

impl SymbolFilter for OptionsFilter {
    fn name(&self) -> &'static str {
        "options"
    }

    fn evaluate(&self, snapshot: &SymbolSnapshot) -> StageEvaluation {
        let Some(chain) = snapshot.options.as_ref() else {
            debug!(symbol = %snapshot.config.ticker, "no options chain, stage passes through");
            return StageEvaluation::pass("no options data available", SignalType::OptionsWait);
        };

        let metrics = match self.analyzer.analyze(
            chain,
            snapshot.current_price,
            &snapshot.series.closes(),
            snapshot.as_of,
        ) {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!(
                    symbol = %snapshot.config.ticker,
                    error = %err,
                    "options analysis failed, stage passes through"
                );
                return StageEvaluation::pass(
                    format!("options analysis failed ({err}), not blocking"),
                    SignalType::OptionsWait,
                );
            }
        };

        let cheap = metrics.iv_rank <= MAX_IV_RANK;
        let bearish = metrics.flow_signal == FlowSignal::Bearish;

        if cheap && !bearish {
            StageEvaluation::pass(
                format!(
                    "IV rank {:.0} low, flow {:?} (conf {:.0})",
                    metrics.iv_rank, metrics.flow_signal, metrics.confidence
                ),
                SignalType::OptionsWait,
            )
        } else if !cheap {
            StageEvaluation::fail(
                format!("IV rank {:.0} above {:.0}, premium too rich", metrics.iv_rank, MAX_IV_RANK),
                SignalType::OptionsWait,
            )
        } else {
            StageEvaluation::fail(
                format!("bearish options flow (conf {:.0})", metrics.confidence),
                SignalType::OptionsWait,
            )
        }
    }
}
