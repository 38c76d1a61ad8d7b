//! Headline sentiment scoring.

use crate::error::DataError;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Stateless compound-sentiment scorer for a single headline.
///
/// Constructed once and passed into the news stage explicitly; implementations
/// must be safe to share across symbols.
pub trait HeadlineScorer: Send + Sync {
    /// Compound score in [-1, 1]; negative is bearish.
    fn compound(&self, headline: &str) -> Result<f64, DataError>;
}

/// VADER lexicon scorer. The news-stage thresholds (±0.5) are calibrated to
/// VADER compound scores.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlineScorer for VaderScorer {
    fn compound(&self, headline: &str) -> Result<f64, DataError> {
        let scores = self.analyzer.polarity_scores(headline);
        Ok(scores.get("compound").copied().unwrap_or(0.0))
    }
}
