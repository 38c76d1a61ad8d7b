//! Broad-market regime gate, assessed once per cycle.

use tracing::warn;

use crate::indicators::trend::sma::sma;
use crate::models::{MarketRegimeState, PriceSeries};

/// Market-stage tuning.
#[derive(Debug, Clone, Copy)]
pub struct MarketRegimeConfig {
    /// SMA window for the index uptrend test.
    pub trend_window: usize,
    /// One-day index return at or below which the regime is labeled Crash.
    pub crash_return: f64,
    /// One-day relative move in the yield proxy above which rates spiked.
    pub spike_change: f64,
}

impl Default for MarketRegimeConfig {
    fn default() -> Self {
        Self {
            trend_window: 120,
            crash_return: -0.03,
            spike_change: 0.05,
        }
    }
}

/// Cycle-wide market verdict shared by every symbol.
#[derive(Debug, Clone)]
pub struct MarketAssessment {
    pub blocked: bool,
    /// None when data was insufficient to classify the regime at all.
    pub regime: Option<MarketRegimeState>,
    pub reason: String,
}

impl MarketAssessment {
    /// Fail-closed assessment when index or yield data cannot be read.
    pub fn insufficient(detail: impl Into<String>) -> Self {
        Self {
            blocked: true,
            regime: None,
            reason: format!("insufficient market data: {}", detail.into()),
        }
    }
}

/// Classifies the broad-market regime from an index series and a treasury
/// yield series.
///
/// Blocking is decided solely by trend and rate spike; a crash-sized down day
/// only sharpens the label. An index in uptrend with a crash-sized move does
/// not block on the crash alone.
#[derive(Debug, Clone, Default)]
pub struct MarketRegimeFilter {
    config: MarketRegimeConfig,
}

impl MarketRegimeFilter {
    pub fn new(config: MarketRegimeConfig) -> Self {
        Self { config }
    }

    pub fn assess(&self, index: &PriceSeries, yields: &PriceSeries) -> MarketAssessment {
        let index_closes = index.closes();
        let Some(index_ma) = sma(&index_closes, self.config.trend_window) else {
            warn!(
                bars = index.len(),
                needed = self.config.trend_window,
                "index history too short for regime assessment"
            );
            return MarketAssessment::insufficient(format!(
                "index has {} bars, need {}",
                index.len(),
                self.config.trend_window
            ));
        };
        let (Some(index_last), Some(index_prev)) = (index.last_close(), index.prev_close()) else {
            return MarketAssessment::insufficient("index series too short for daily return");
        };
        let (Some(yield_last), Some(yield_prev)) = (yields.last_close(), yields.prev_close()) else {
            return MarketAssessment::insufficient("yield series too short for daily change");
        };

        let uptrend = index_last > index_ma;
        let day_return = index_last / index_prev - 1.0;
        let crash = day_return < self.config.crash_return;
        let yield_change = if yield_prev != 0.0 {
            (yield_last - yield_prev) / yield_prev
        } else {
            0.0
        };
        let rate_spike = yield_change > self.config.spike_change;

        let blocked = !uptrend || rate_spike;

        // Label precedence: Crash > RateSpike > Downtrend > Safe.
        let regime = if crash {
            MarketRegimeState::Crash
        } else if rate_spike {
            MarketRegimeState::RateSpike
        } else if !uptrend {
            MarketRegimeState::Downtrend
        } else {
            MarketRegimeState::Safe
        };

        let reason = if blocked {
            format!(
                "market unfavorable ({}): index {:.2} vs {}d MA {:.2}, yield change {:+.1}%",
                regime.label(),
                index_last,
                self.config.trend_window,
                index_ma,
                yield_change * 100.0
            )
        } else {
            format!(
                "market favorable ({}): index {:.2} above {}d MA {:.2}",
                regime.label(),
                index_last,
                self.config.trend_window,
                index_ma
            )
        };

        MarketAssessment { blocked, regime: Some(regime), reason }
    }
}
