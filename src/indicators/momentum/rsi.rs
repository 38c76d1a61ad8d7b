//! RSI (Relative Strength Index) with Wilder smoothing.

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate RSI over closes using Wilder smoothing (EMA with alpha = 1/period):
/// the first average is a simple mean of the first `period` gains/losses, then
/// `avg = (avg * (period - 1) + current) / period`.
///
/// RSI = 100 - 100 / (1 + avg_gain / avg_loss)
///
/// When the smoothed loss is zero, RSI is defined as 100 (maximal bullishness,
/// never a division panic).
pub fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// RSI with the classical 14-bar period.
pub fn wilder_rsi_default(closes: &[f64]) -> Option<f64> {
    wilder_rsi(closes, DEFAULT_RSI_PERIOD)
}
