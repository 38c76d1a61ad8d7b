//! Cycle-summary delivery.

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::{info, warn};

use crate::error::DeliveryError;
use crate::filters::MarketAssessment;
use crate::models::{SignalRecord, StageVerdict};

/// Outbound channel for the end-of-cycle summary.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(&self, summary: &str) -> Result<(), DeliveryError>;
}

/// Writes the summary to the structured log. The default channel when no
/// external delivery is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationChannel;

#[async_trait]
impl NotificationChannel for LogNotificationChannel {
    async fn send(&self, summary: &str) -> Result<(), DeliveryError> {
        info!(summary = %summary, "cycle summary");
        Ok(())
    }
}

/// Human-readable summary of one scan cycle.
pub fn format_cycle_summary(market: &MarketAssessment, strong_buys: &[&SignalRecord]) -> String {
    let regime = market
        .regime
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut out = format!("Scan complete. Market regime: {regime}.");
    if market.blocked {
        out.push_str(" Entries blocked at the market gate.");
        return out;
    }

    if strong_buys.is_empty() {
        out.push_str(" No strong buy candidates.");
        return out;
    }

    out.push_str(" Strong buys:");
    for record in strong_buys {
        out.push_str(&format!("\n- {} @ {:.2}", record.ticker, record.entry_price));
        // Stage reasons carry the numbers (RSI, IV rank, support distance).
        for stage in ["chart", "options", "support"] {
            if let Some(outcome) = record.outcome(stage) {
                if outcome.verdict == StageVerdict::Pass {
                    out.push_str(&format!(" | {}", outcome.reason));
                }
            }
        }
    }
    out
}

/// Send with exponential backoff; gives up after `max_retries` extra attempts.
pub async fn send_with_retry(
    channel: &dyn NotificationChannel,
    summary: &str,
    max_retries: usize,
) -> Result<(), DeliveryError> {
    (|| async { channel.send(summary).await })
        .retry(ExponentialBuilder::default().with_max_times(max_retries))
        .notify(|err: &DeliveryError, dur| {
            warn!(error = %err, retry_in = ?dur, "summary delivery failed, retrying");
        })
        .await
}
