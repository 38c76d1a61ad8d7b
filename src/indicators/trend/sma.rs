//! Simple moving averages and the MA trend state.

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(values[values.len() - period..].iter().sum::<f64>() / period as f64)
}

/// Fast/slow moving-average pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendState {
    pub ma_fast: f64,
    pub ma_slow: f64,
}

impl TrendState {
    /// Golden state: fast MA currently above slow MA. A level comparison, not
    /// a crossover-edge event.
    pub fn golden(&self) -> bool {
        self.ma_fast > self.ma_slow
    }
}

/// Compute the fast/slow MA pair, requiring enough history for the slow leg.
pub fn ma_trend(values: &[f64], fast: usize, slow: usize) -> Option<TrendState> {
    Some(TrendState {
        ma_fast: sma(values, fast)?,
        ma_slow: sma(values, slow)?,
    })
}
