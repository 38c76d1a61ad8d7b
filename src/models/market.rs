//! Price history and symbol universe models.

use crate::error::DataError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(timestamp: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self { timestamp, open, high, low, close, volume }
    }
}

/// Time-ordered bar history for one symbol.
///
/// Ascending timestamps with no duplicates is a hard invariant, checked at
/// construction and on push.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn empty() -> Self {
        Self { bars: Vec::new() }
    }

    /// Build a series from bars, rejecting out-of-order or duplicate timestamps.
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self, DataError> {
        for pair in bars.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(DataError::InvalidSeries(format!(
                    "bar at {} does not follow {}",
                    pair[1].timestamp, pair[0].timestamp
                )));
            }
        }
        Ok(Self { bars })
    }

    pub fn push(&mut self, bar: PriceBar) -> Result<(), DataError> {
        if let Some(last) = self.bars.last() {
            if bar.timestamp <= last.timestamp {
                return Err(DataError::InvalidSeries(format!(
                    "bar at {} does not follow {}",
                    bar.timestamp, last.timestamp
                )));
            }
        }
        self.bars.push(bar);
        Ok(())
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    pub fn prev_close(&self) -> Option<f64> {
        if self.bars.len() < 2 {
            return None;
        }
        Some(self.bars[self.bars.len() - 2].close)
    }
}

/// Volatility bucket a symbol belongs to; buckets partition the universe and
/// pick the RSI thresholds used by the chart stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityBucket {
    High,
    Medium,
    Low,
}

impl VolatilityBucket {
    /// Default (buy, sell) RSI thresholds for the bucket.
    pub fn rsi_thresholds(&self) -> (f64, f64) {
        match self {
            Self::High => (25.0, 65.0),
            Self::Medium => (30.0, 70.0),
            Self::Low => (35.0, 75.0),
        }
    }
}

/// Per-symbol static configuration. Process-wide; the only entity that
/// survives between evaluation cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    pub ticker: String,
    pub bucket: VolatilityBucket,
    pub buy_rsi_threshold: f64,
    pub sell_rsi_threshold: f64,
}

impl SymbolConfig {
    pub fn new(ticker: impl Into<String>, bucket: VolatilityBucket) -> Self {
        let (buy, sell) = bucket.rsi_thresholds();
        Self {
            ticker: ticker.into(),
            bucket,
            buy_rsi_threshold: buy,
            sell_rsi_threshold: sell,
        }
    }

    pub fn with_thresholds(mut self, buy: f64, sell: f64) -> Self {
        self.buy_rsi_threshold = buy;
        self.sell_rsi_threshold = sell;
        self
    }
}
