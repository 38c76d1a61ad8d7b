//! Prometheus counters for the scan loop.

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

/// Scanner-level metrics, registered against an owned registry.
pub struct Metrics {
    registry: Registry,
    pub symbols_evaluated_total: IntCounter,
    pub strong_buy_signals_total: IntCounter,
    pub store_failures_total: IntCounter,
    pub delivery_failures_total: IntCounter,
    pub cycle_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let symbols_evaluated_total = IntCounter::new(
            "symbols_evaluated_total",
            "Symbols run through the filter chain",
        )?;
        let strong_buy_signals_total = IntCounter::new(
            "strong_buy_signals_total",
            "Symbols that passed every stage",
        )?;
        let store_failures_total = IntCounter::new(
            "store_failures_total",
            "Signal store append failures",
        )?;
        let delivery_failures_total = IntCounter::new(
            "delivery_failures_total",
            "Cycle summaries that could not be delivered after retries",
        )?;
        let cycle_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "cycle_duration_seconds",
            "Wall-clock duration of one scan cycle",
        ))?;

        registry.register(Box::new(symbols_evaluated_total.clone()))?;
        registry.register(Box::new(strong_buy_signals_total.clone()))?;
        registry.register(Box::new(store_failures_total.clone()))?;
        registry.register(Box::new(delivery_failures_total.clone()))?;
        registry.register(Box::new(cycle_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            symbols_evaluated_total,
            strong_buy_signals_total,
            store_failures_total,
            delivery_failures_total,
            cycle_duration_seconds,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
