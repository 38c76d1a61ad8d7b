//! Rolling annualized realized volatility of log returns.
//!
//! Stands in for a historical implied-volatility sample when no true
//! historical-IV feed exists.

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Rolling sample standard deviation of log returns over `window` bars,
/// annualized by sqrt(periods_per_year). One output per full window.
pub fn rolling_realized_vol(closes: &[f64], window: usize, periods_per_year: f64) -> Vec<f64> {
    if window < 2 || closes.len() < window + 1 {
        return Vec::new();
    }

    let returns: Vec<f64> = closes
        .windows(2)
        .filter(|pair| pair[0] > 0.0 && pair[1] > 0.0)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect();
    if returns.len() < window {
        return Vec::new();
    }

    let annualize = periods_per_year.sqrt();
    let mut out = Vec::with_capacity(returns.len() - window + 1);
    for chunk in returns.windows(window) {
        let mean = chunk.iter().sum::<f64>() / window as f64;
        let var = chunk.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        out.push(var.sqrt() * annualize);
    }
    out
}
