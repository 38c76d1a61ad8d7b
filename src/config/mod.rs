//! Environment-backed configuration getters.
//!
//! `.env` loading happens once in the binary via `dotenvy::dotenv()`; these
//! getters read plain process environment variables with sane defaults.

use std::env;

use crate::models::{SymbolConfig, VolatilityBucket};

/// Deployment environment name ("production", "development", ...).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Seconds between scan cycles.
pub fn get_scan_interval_seconds() -> u64 {
    env::var("SCAN_INTERVAL_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}

/// Broad-market index symbol used by the regime gate.
pub fn get_index_symbol() -> String {
    env::var("INDEX_SYMBOL").unwrap_or_else(|_| "QQQ".to_string())
}

/// Treasury-yield proxy symbol used by the rate-spike check.
pub fn get_yield_symbol() -> String {
    env::var("YIELD_SYMBOL").unwrap_or_else(|_| "^TNX".to_string())
}

/// Path of the JSONL signal store.
pub fn get_signal_store_path() -> String {
    env::var("SIGNAL_STORE_PATH").unwrap_or_else(|_| "signals.jsonl".to_string())
}

/// Default scan universe, bucketed by historical volatility.
pub fn default_universe() -> Vec<SymbolConfig> {
    vec![
        SymbolConfig::new("NVDA", VolatilityBucket::High),
        SymbolConfig::new("TSLA", VolatilityBucket::High),
        SymbolConfig::new("META", VolatilityBucket::Medium),
        SymbolConfig::new("AMZN", VolatilityBucket::Medium),
        SymbolConfig::new("GOOGL", VolatilityBucket::Medium),
        SymbolConfig::new("AAPL", VolatilityBucket::Low),
        SymbolConfig::new("MSFT", VolatilityBucket::Low),
    ]
}
