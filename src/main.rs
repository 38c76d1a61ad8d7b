//! Pentrix scanner
//!
//! Runs one scan cycle over fixture data, then keeps scanning on the
//! configured interval until interrupted.

use chrono::{Duration, TimeZone, Utc};
use dotenvy::dotenv;
use pentrix::analysis::VaderScorer;
use pentrix::classifier::{FilterSet, SignalClassifier};
use pentrix::config;
use pentrix::filters::MarketRegimeFilter;
use pentrix::logging;
use pentrix::metrics::Metrics;
use pentrix::models::{PriceBar, PriceSeries};
use pentrix::scanner::scheduler::ScanScheduler;
use pentrix::scanner::{Scanner, ScannerConfig};
use pentrix::services::{
    FixtureHeadlineProvider, FixtureOptionsProvider, FixturePriceProvider, JsonlSignalStore,
    LogNotificationChannel,
};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    logging::init_logging();

    let env = config::get_environment();
    info!(environment = %env, "Starting Pentrix scanner");

    let metrics = Arc::new(Metrics::new()?);

    let universe = config::default_universe();
    let scanner_config = ScannerConfig {
        index_symbol: config::get_index_symbol(),
        yield_symbol: config::get_yield_symbol(),
        ..ScannerConfig::default()
    };

    let prices = Arc::new(FixturePriceProvider::new());
    prices.insert(&scanner_config.index_symbol, trending_series(400.0, 0.5, 300));
    prices.insert(&scanner_config.yield_symbol, trending_series(4.2, 0.0, 300));
    for symbol in &universe {
        prices.insert(&symbol.ticker, trending_series(100.0, 0.3, 300));
    }

    let headlines = Arc::new(FixtureHeadlineProvider::new());
    for symbol in &universe {
        headlines.insert(
            &symbol.ticker,
            vec![format!("{} reports quarterly results", symbol.ticker)],
        );
    }

    let scanner = Arc::new(Scanner::new(
        prices,
        Arc::new(FixtureOptionsProvider::new()),
        headlines,
        Arc::new(JsonlSignalStore::new(config::get_signal_store_path())),
        Arc::new(LogNotificationChannel),
        MarketRegimeFilter::default(),
        SignalClassifier::new(FilterSet::standard(Arc::new(VaderScorer::new()))),
        universe,
        scanner_config,
        Some(metrics),
    ));

    let records = scanner.run_cycle().await;
    for record in &records {
        info!(
            symbol = %record.ticker,
            signal = record.signal_type.as_str(),
            price = record.entry_price,
            "signal"
        );
    }

    let interval = config::get_scan_interval_seconds();
    let scheduler = ScanScheduler::new(scanner, interval)?;
    scheduler.start().await;

    signal::ctrl_c().await?;
    info!("Shutdown signal received");
    scheduler.stop().await;
    Ok(())
}

/// Straight-line daily series for fixture wiring.
fn trending_series(start: f64, step: f64, bars: usize) -> PriceSeries {
    let origin = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let bars = (0..bars)
        .map(|i| {
            let close = start + step * i as f64;
            PriceBar::new(
                origin + Duration::days(i as i64),
                close,
                close + 0.5,
                close - 0.5,
                close,
                1_000_000.0,
            )
        })
        .collect();
    PriceSeries::from_bars(bars).expect("ascending timestamps")
}
