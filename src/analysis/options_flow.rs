//! Options chain analysis: IV rank against a realized-vol proxy plus a
//! directional read of unusual flow.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::DataError;
use crate::indicators::volatility::realized::{rolling_realized_vol, TRADING_DAYS_PER_YEAR};
use crate::models::{
    ExpirationChain, FlowSignal, IvStatus, OptionContract, OptionsMetrics, OptionsSnapshot,
};

/// Analyzer tuning.
#[derive(Debug, Clone, Copy)]
pub struct OptionsFlowConfig {
    /// Preferred days-to-expiration when picking the IV expiration.
    pub target_dte: i64,
    /// Acceptable DTE range; outside it, fall back to the soonest expiration.
    pub dte_window: (i64, i64),
    /// Rolling window for the realized-vol proxy.
    pub vol_window: usize,
    /// How many proxy samples the rank is computed against.
    pub lookback: usize,
    /// Net score beyond which flow is called directional.
    pub flow_threshold: f64,
    /// Put/call volume ratio below which calls dominate.
    pub pc_bullish: f64,
    /// Put/call volume ratio above which puts dominate.
    pub pc_bearish: f64,
    /// volume / (open_interest + 1) above which a contract is unusual.
    pub unusual_vol_oi: f64,
    /// One side must carry this multiple of the other's large-trade notional.
    pub large_trade_factor: f64,
}

impl Default for OptionsFlowConfig {
    fn default() -> Self {
        Self {
            target_dte: 37,
            dte_window: (20, 60),
            vol_window: 30,
            lookback: 252,
            flow_threshold: 30.0,
            pc_bullish: 0.7,
            pc_bearish: 1.3,
            unusual_vol_oi: 2.0,
            large_trade_factor: 1.5,
        }
    }
}

/// Sentinel put/call ratio when the chain has zero call volume.
pub const PC_RATIO_NO_CALLS: f64 = 999.0;

/// Derives [`OptionsMetrics`] from one chain snapshot and a close history.
#[derive(Debug, Clone, Default)]
pub struct OptionsFlowAnalyzer {
    config: OptionsFlowConfig,
}

impl OptionsFlowAnalyzer {
    pub fn new(config: OptionsFlowConfig) -> Self {
        Self { config }
    }

    /// Full analysis: IV rank/percentile from the ATM call of the target
    /// expiration, flow scoring from the nearest expiration.
    pub fn analyze(
        &self,
        snapshot: &OptionsSnapshot,
        current_price: f64,
        history_closes: &[f64],
        as_of: NaiveDate,
    ) -> Result<OptionsMetrics, DataError> {
        if snapshot.is_empty() {
            return Err(DataError::Unavailable(format!(
                "{}: empty options chain",
                snapshot.symbol
            )));
        }

        let target = self.select_expiration(snapshot, as_of);
        let atm = nearest_strike(&target.calls, current_price).ok_or_else(|| {
            DataError::Unavailable(format!(
                "{}: no calls listed for {}",
                snapshot.symbol, target.expires_on
            ))
        })?;
        let current_iv = atm.implied_volatility;

        let proxy = self.iv_proxy_samples(history_closes);
        let (iv_rank, iv_percentile) = rank_and_percentile(current_iv, &proxy);
        debug!(
            symbol = %snapshot.symbol,
            expiration = %target.expires_on,
            current_iv,
            iv_rank,
            samples = proxy.len(),
            "options iv computed"
        );

        // Flow is always read off the nearest expiration, where short-dated
        // positioning concentrates.
        let nearest = &snapshot.expirations[0];
        let flow = self.score_flow(nearest);

        Ok(OptionsMetrics {
            current_iv,
            iv_rank,
            iv_percentile,
            iv_status: IvStatus::from_rank(iv_rank),
            flow_signal: flow.signal,
            confidence: flow.confidence,
            put_call_ratio: flow.put_call_ratio,
            flow_notes: flow.notes,
        })
    }

    /// The expiration closest to `target_dte` within the DTE window; if none
    /// qualifies, the soonest expiration.
    fn select_expiration<'a>(&self, snapshot: &'a OptionsSnapshot, as_of: NaiveDate) -> &'a ExpirationChain {
        let (lo, hi) = self.config.dte_window;
        snapshot
            .expirations
            .iter()
            .filter(|e| {
                let dte = (e.expires_on - as_of).num_days();
                dte >= lo && dte <= hi
            })
            .min_by_key(|e| ((e.expires_on - as_of).num_days() - self.config.target_dte).abs())
            .unwrap_or(&snapshot.expirations[0])
    }

    /// Realized-vol samples standing in for historical IV, trimmed to the
    /// configured lookback.
    fn iv_proxy_samples(&self, closes: &[f64]) -> Vec<f64> {
        let mut samples = rolling_realized_vol(closes, self.config.vol_window, TRADING_DAYS_PER_YEAR);
        if samples.len() > self.config.lookback {
            samples.drain(..samples.len() - self.config.lookback);
        }
        samples
    }

    fn score_flow(&self, chain: &ExpirationChain) -> FlowScore {
        let mut bull = 0.0_f64;
        let mut bear = 0.0_f64;
        let mut notes = Vec::new();

        let call_volume: f64 = chain.calls.iter().map(|c| c.volume).sum();
        let put_volume: f64 = chain.puts.iter().map(|p| p.volume).sum();
        let put_call_ratio = if call_volume > 0.0 {
            put_volume / call_volume
        } else {
            PC_RATIO_NO_CALLS
        };

        if put_call_ratio < self.config.pc_bullish {
            bull += 30.0;
            notes.push(format!("call volume dominant (P/C {:.2})", put_call_ratio));
        } else if put_call_ratio > self.config.pc_bearish {
            bear += 30.0;
            notes.push(format!("put volume dominant (P/C {:.2})", put_call_ratio));
        }

        let unusual_calls = count_unusual(&chain.calls, self.config.unusual_vol_oi);
        let unusual_puts = count_unusual(&chain.puts, self.config.unusual_vol_oi);
        if unusual_calls > unusual_puts {
            bull += 25.0;
            notes.push(format!("{} calls with unusual volume vs open interest", unusual_calls));
        } else if unusual_puts > unusual_calls {
            bear += 25.0;
            notes.push(format!("{} puts with unusual volume vs open interest", unusual_puts));
        }

        let (large_calls, large_puts) = large_trade_notional(chain);
        if large_calls > large_puts * self.config.large_trade_factor {
            bull += 25.0;
            notes.push("large trades concentrated in calls".to_string());
        } else if large_puts > large_calls * self.config.large_trade_factor {
            bear += 25.0;
            notes.push("large trades concentrated in puts".to_string());
        }

        let net = bull - bear;
        let (signal, confidence) = if net > self.config.flow_threshold {
            (FlowSignal::Bullish, bull.min(100.0))
        } else if net < -self.config.flow_threshold {
            (FlowSignal::Bearish, bear.min(100.0))
        } else {
            (FlowSignal::Neutral, 50.0)
        };

        FlowScore { signal, confidence, put_call_ratio, notes }
    }
}

struct FlowScore {
    signal: FlowSignal,
    confidence: f64,
    put_call_ratio: f64,
    notes: Vec<String>,
}

fn nearest_strike(contracts: &[OptionContract], price: f64) -> Option<&OptionContract> {
    contracts
        .iter()
        .min_by(|a, b| (a.strike - price).abs().total_cmp(&(b.strike - price).abs()))
}

fn count_unusual(contracts: &[OptionContract], threshold: f64) -> usize {
    contracts
        .iter()
        .filter(|c| c.volume / (c.open_interest + 1.0) > threshold)
        .count()
}

/// Premium traded in each side's large prints. A contract is large when its
/// volume strictly exceeds that side's 90th-percentile volume, so a
/// single-contract side never produces a large print.
fn large_trade_notional(chain: &ExpirationChain) -> (f64, f64) {
    let side_sum = |contracts: &[OptionContract]| {
        let volumes: Vec<f64> = contracts.iter().map(|c| c.volume).collect();
        if volumes.is_empty() {
            return 0.0;
        }
        let cutoff = quantile(&volumes, 0.9);
        contracts
            .iter()
            .filter(|c| c.volume > cutoff)
            .map(|c| c.volume * c.last_price)
            .sum::<f64>()
    };
    (side_sum(&chain.calls), side_sum(&chain.puts))
}

/// IV rank (position within the proxy's min-max range, 0-100) and percentile
/// (share of samples below current, 0-100). A degenerate sample set, empty or
/// flat, yields a noncommittal 50 for both.
fn rank_and_percentile(current: f64, samples: &[f64]) -> (f64, f64) {
    if samples.is_empty() {
        return (50.0, 50.0);
    }
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max > min) {
        return (50.0, 50.0);
    }
    let rank = ((current - min) / (max - min) * 100.0).clamp(0.0, 100.0);
    let below = samples.iter().filter(|&&s| s < current).count();
    let percentile = below as f64 / samples.len() as f64 * 100.0;
    (rank, percentile)
}

/// Linear-interpolation quantile, `q` in [0, 1]. Assumes non-empty input.
fn quantile(values: &[f64], q: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}
