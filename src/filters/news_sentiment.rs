//! News stage: average headline sentiment veto.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::HeadlineScorer;
use crate::filters::{StageEvaluation, SymbolFilter, SymbolSnapshot};
use crate::models::SignalType;

const MAX_HEADLINES: usize = 3;
const BLOCK_THRESHOLD: f64 = -0.5;

/// Averages the compound sentiment of the most recent headlines and blocks
/// only on strongly negative news. No headlines reads as neutral, and a scorer
/// error degrades to neutral rather than blocking the symbol.
pub struct NewsSentimentFilter {
    scorer: Arc<dyn HeadlineScorer>,
}

impl NewsSentimentFilter {
    pub fn new(scorer: Arc<dyn HeadlineScorer>) -> Self {
        Self { scorer }
    }

    fn average_compound(&self, snapshot: &SymbolSnapshot) -> Option<f64> {
        let headlines = &snapshot.headlines[..snapshot.headlines.len().min(MAX_HEADLINES)];
        if headlines.is_empty() {
            return Some(0.0);
        }

        let mut total = 0.0;
        for headline in headlines {
            match self.scorer.compound(headline) {
                Ok(score) => total += score,
                Err(err) => {
                    warn!(
                        symbol = %snapshot.config.ticker,
                        error = %err,
                        "headline scoring failed, treating news as neutral"
                    );
                    return None;
                }
            }
        }
        Some(total / headlines.len() as f64)
    }
}

impl SymbolFilter for NewsSentimentFilter {
    fn name(&self) -> &'static str {
        "news"
    }

    fn evaluate(&self, snapshot: &SymbolSnapshot) -> StageEvaluation {
        let Some(avg) = self.average_compound(snapshot) else {
            return StageEvaluation::pass("sentiment analysis failed, assumed neutral", SignalType::NewsBlock);
        };

        debug!(
            symbol = %snapshot.config.ticker,
            headlines = snapshot.headlines.len().min(MAX_HEADLINES),
            avg_compound = avg,
            "news stage scored"
        );

        if avg <= BLOCK_THRESHOLD {
            StageEvaluation::fail(
                format!("bearish news (avg compound {:.2})", avg),
                SignalType::NewsBlock,
            )
        } else {
            let label = if avg >= 0.5 { "bullish" } else { "neutral" };
            StageEvaluation::pass(
                format!("{label} news (avg compound {avg:.2})"),
                SignalType::NewsBlock,
            )
        }
    }
}
