//! Pentrix: a staged signal classifier for an equity watchlist.
//!
//! A scan cycle gates on broad-market regime, then walks each symbol through
//! chart, news, options, and support stages; the first failing stage decides
//! the terminal signal, and only a clean sweep yields a strong buy.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod filters;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod scanner;
pub mod services;
