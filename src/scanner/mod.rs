//! Scan-cycle orchestration.
//!
//! One cycle assesses the broad market once, evaluates every symbol in the
//! universe against the shared assessment, persists every record, and delivers
//! a summary. Per-symbol data failures degrade that symbol's snapshot instead
//! of aborting the cycle.

pub mod scheduler;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::classifier::SignalClassifier;
use crate::filters::{MarketAssessment, MarketRegimeFilter, SymbolSnapshot};
use crate::metrics::Metrics;
use crate::models::{PriceSeries, SignalRecord, SignalType, SymbolConfig};
use crate::services::{
    format_cycle_summary, send_with_retry, HeadlineProvider, NotificationChannel,
    OptionsChainProvider, PriceSeriesProvider, SignalStore,
};

const SUMMARY_RETRIES: usize = 3;

/// Scanner tuning.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub index_symbol: String,
    pub yield_symbol: String,
    /// Bars of history fetched per symbol.
    pub lookback: usize,
    pub headline_limit: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            index_symbol: "QQQ".to_string(),
            yield_symbol: "^TNX".to_string(),
            lookback: 300,
            headline_limit: 3,
        }
    }
}

/// Owns the collaborators of the scan loop.
pub struct Scanner {
    prices: Arc<dyn PriceSeriesProvider>,
    options: Arc<dyn OptionsChainProvider>,
    headlines: Arc<dyn HeadlineProvider>,
    store: Arc<dyn SignalStore>,
    channel: Arc<dyn NotificationChannel>,
    regime: MarketRegimeFilter,
    classifier: SignalClassifier,
    universe: Vec<SymbolConfig>,
    config: ScannerConfig,
    metrics: Option<Arc<Metrics>>,
}

impl Scanner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        prices: Arc<dyn PriceSeriesProvider>,
        options: Arc<dyn OptionsChainProvider>,
        headlines: Arc<dyn HeadlineProvider>,
        store: Arc<dyn SignalStore>,
        channel: Arc<dyn NotificationChannel>,
        regime: MarketRegimeFilter,
        classifier: SignalClassifier,
        universe: Vec<SymbolConfig>,
        config: ScannerConfig,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            prices,
            options,
            headlines,
            store,
            channel,
            regime,
            classifier,
            universe,
            config,
            metrics,
        }
    }

    /// Run one full scan cycle and return every record produced.
    pub async fn run_cycle(&self) -> Vec<SignalRecord> {
        let started = Instant::now();
        info!(symbols = self.universe.len(), "scan cycle starting");

        let market = self.assess_market().await;
        info!(blocked = market.blocked, reason = %market.reason, "market assessed");

        let mut records = Vec::with_capacity(self.universe.len());
        for symbol in &self.universe {
            let snapshot = self.build_snapshot(symbol).await;
            let record = self.classifier.classify(&snapshot, &market);

            if let Some(m) = &self.metrics {
                m.symbols_evaluated_total.inc();
                if record.signal_type == SignalType::StrongBuy {
                    m.strong_buy_signals_total.inc();
                }
            }

            if let Err(err) = self.store.append(&record).await {
                error!(symbol = %record.ticker, error = %err, "failed to persist signal");
                if let Some(m) = &self.metrics {
                    m.store_failures_total.inc();
                }
            }
            records.push(record);
        }

        let strong_buys: Vec<&SignalRecord> = records
            .iter()
            .filter(|r| r.signal_type == SignalType::StrongBuy)
            .collect();
        let summary = format_cycle_summary(&market, &strong_buys);
        if let Err(err) = send_with_retry(self.channel.as_ref(), &summary, SUMMARY_RETRIES).await {
            error!(error = %err, "summary delivery failed after retries");
            if let Some(m) = &self.metrics {
                m.delivery_failures_total.inc();
            }
        }

        let elapsed = started.elapsed();
        if let Some(m) = &self.metrics {
            m.cycle_duration_seconds.observe(elapsed.as_secs_f64());
        }
        info!(
            elapsed_ms = elapsed.as_millis() as u64,
            strong_buys = strong_buys.len(),
            "scan cycle complete"
        );

        records
    }

    /// Fetch index and yield series and classify the regime. Any fetch error
    /// fails closed.
    async fn assess_market(&self) -> MarketAssessment {
        let index = match self
            .prices
            .fetch(&self.config.index_symbol, self.config.lookback)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol = %self.config.index_symbol, error = %err, "index fetch failed");
                return MarketAssessment::insufficient(format!("index fetch failed: {err}"));
            }
        };
        let yields = match self
            .prices
            .fetch(&self.config.yield_symbol, self.config.lookback)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol = %self.config.yield_symbol, error = %err, "yield fetch failed");
                return MarketAssessment::insufficient(format!("yield fetch failed: {err}"));
            }
        };
        self.regime.assess(&index, &yields)
    }

    /// Assemble one symbol's snapshot, degrading gracefully on partial data:
    /// missing series becomes empty (downstream stages fail it on history),
    /// missing headlines read neutral, a missing chain passes through.
    async fn build_snapshot(&self, symbol: &SymbolConfig) -> SymbolSnapshot {
        let series = match self.prices.fetch(&symbol.ticker, self.config.lookback).await {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol = %symbol.ticker, error = %err, "price fetch failed");
                PriceSeries::empty()
            }
        };
        let headlines = match self
            .headlines
            .fetch(&symbol.ticker, self.config.headline_limit)
            .await
        {
            Ok(headlines) => headlines,
            Err(err) => {
                warn!(symbol = %symbol.ticker, error = %err, "headline fetch failed");
                Vec::new()
            }
        };
        let options = match self.options.fetch(&symbol.ticker).await {
            Ok(chain) => Some(chain),
            Err(err) => {
                warn!(symbol = %symbol.ticker, error = %err, "options fetch failed");
                None
            }
        };

        let current_price = series.last_close().unwrap_or(0.0);
        SymbolSnapshot {
            config: symbol.clone(),
            series,
            current_price,
            headlines,
            options,
            as_of: Utc::now().date_naive(),
        }
    }
}
