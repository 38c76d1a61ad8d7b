//! Market-data provider traits and in-memory fixture implementations.
//!
//! Production providers sit behind these traits; the fixture variants back
//! the demo binary and the integration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::DataError;
use crate::models::{OptionsSnapshot, PriceSeries};

/// Daily bar history for one symbol, most recent last.
#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    async fn fetch(&self, symbol: &str, lookback: usize) -> Result<PriceSeries, DataError>;
}

/// Current option chain snapshot for one symbol.
#[async_trait]
pub trait OptionsChainProvider: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<OptionsSnapshot, DataError>;
}

/// Recent headlines for one symbol, newest first.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    async fn fetch(&self, symbol: &str, limit: usize) -> Result<Vec<String>, DataError>;
}

/// Serves pre-loaded series keyed by symbol.
#[derive(Default)]
pub struct FixturePriceProvider {
    series: Mutex<HashMap<String, PriceSeries>>,
}

impl FixturePriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, symbol: impl Into<String>, series: PriceSeries) {
        self.series.lock().unwrap().insert(symbol.into(), series);
    }
}

#[async_trait]
impl PriceSeriesProvider for FixturePriceProvider {
    async fn fetch(&self, symbol: &str, lookback: usize) -> Result<PriceSeries, DataError> {
        let guard = self.series.lock().unwrap();
        let series = guard
            .get(symbol)
            .ok_or_else(|| DataError::Unavailable(format!("no price fixture for {symbol}")))?;
        let bars = series.bars();
        let start = bars.len().saturating_sub(lookback);
        PriceSeries::from_bars(bars[start..].to_vec())
    }
}

/// Serves pre-loaded chains keyed by symbol.
#[derive(Default)]
pub struct FixtureOptionsProvider {
    chains: Mutex<HashMap<String, OptionsSnapshot>>,
}

impl FixtureOptionsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, symbol: impl Into<String>, snapshot: OptionsSnapshot) {
        self.chains.lock().unwrap().insert(symbol.into(), snapshot);
    }
}

#[async_trait]
impl OptionsChainProvider for FixtureOptionsProvider {
    async fn fetch(&self, symbol: &str) -> Result<OptionsSnapshot, DataError> {
        self.chains
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .ok_or_else(|| DataError::Unavailable(format!("no options fixture for {symbol}")))
    }
}

/// Serves pre-loaded headlines keyed by symbol; unknown symbols get none.
#[derive(Default)]
pub struct FixtureHeadlineProvider {
    headlines: Mutex<HashMap<String, Vec<String>>>,
}

impl FixtureHeadlineProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, symbol: impl Into<String>, headlines: Vec<String>) {
        self.headlines.lock().unwrap().insert(symbol.into(), headlines);
    }
}

#[async_trait]
impl HeadlineProvider for FixtureHeadlineProvider {
    async fn fetch(&self, symbol: &str, limit: usize) -> Result<Vec<String>, DataError> {
        let mut headlines = self
            .headlines
            .lock()
            .unwrap()
            .get(symbol)
            .cloned()
            .unwrap_or_default();
        headlines.truncate(limit);
        Ok(headlines)
    }
}
