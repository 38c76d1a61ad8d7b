//! Chart stage: oversold RSI plus a golden MA state.

use tracing::debug;

use crate::filters::{StageEvaluation, SymbolFilter, SymbolSnapshot};
use crate::indicators::momentum::rsi::wilder_rsi_default;
use crate::indicators::trend::sma::ma_trend;
use crate::models::SignalType;

const MIN_BARS: usize = 60;
const MA_FAST: usize = 20;
const MA_SLOW: usize = 60;

/// Passes only when the symbol is oversold (RSI below its per-symbol buy
/// threshold) while the 20/60 MA state is golden. Failure maps to Sell when
/// overbought, Hold otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartTechnicalFilter;

impl SymbolFilter for ChartTechnicalFilter {
    fn name(&self) -> &'static str {
        "chart"
    }

    fn evaluate(&self, snapshot: &SymbolSnapshot) -> StageEvaluation {
        let closes = snapshot.series.closes();
        if closes.len() < MIN_BARS {
            return StageEvaluation::fail(
                format!("only {} bars of history, need {}", closes.len(), MIN_BARS),
                SignalType::Hold,
            );
        }

        let Some(rsi) = wilder_rsi_default(&closes) else {
            return StageEvaluation::fail("not enough closes to compute RSI", SignalType::Hold);
        };
        let Some(trend) = ma_trend(&closes, MA_FAST, MA_SLOW) else {
            return StageEvaluation::fail("not enough closes for MA trend", SignalType::Hold);
        };

        debug!(
            symbol = %snapshot.config.ticker,
            rsi,
            ma_fast = trend.ma_fast,
            ma_slow = trend.ma_slow,
            "chart stage computed"
        );

        let buy = snapshot.config.buy_rsi_threshold;
        let sell = snapshot.config.sell_rsi_threshold;

        if rsi < buy && trend.golden() {
            return StageEvaluation::pass(
                format!("RSI {:.1} oversold (< {:.0}) with golden MA state", rsi, buy),
                SignalType::Hold,
            );
        }

        if rsi > sell {
            StageEvaluation::fail(
                format!("RSI {:.1} overbought (> {:.0})", rsi, sell),
                SignalType::Sell,
            )
        } else if !trend.golden() {
            StageEvaluation::fail(
                format!(
                    "MA state not golden ({:.2} <= {:.2})",
                    trend.ma_fast, trend.ma_slow
                ),
                SignalType::Hold,
            )
        } else {
            StageEvaluation::fail(
                format!("RSI {:.1} not oversold (needs < {:.0})", rsi, buy),
                SignalType::Hold,
            )
        }
    }
}
