//! Support/resistance detection via local price extrema.

use crate::indicators::structure::extrema::{local_extrema, Extremum};
use crate::models::{ExtremaLevel, LevelKind, LevelStrength, PriceSeries};

/// Detector tuning.
#[derive(Debug, Clone, Copy)]
pub struct SrConfig {
    /// Neighbor radius for strict local extrema.
    pub order: usize,
    /// Only extrema within the last `recency_window` bars count as levels;
    /// older candidates are discarded entirely.
    pub recency_window: usize,
    /// Relative band for counting touches when grading level strength.
    pub touch_tolerance: f64,
    /// Relative band for merging nearby levels into one.
    pub cluster_tolerance: f64,
}

impl Default for SrConfig {
    fn default() -> Self {
        Self {
            order: 5,
            recency_window: 120,
            touch_tolerance: 0.02,
            cluster_tolerance: 0.015,
        }
    }
}

/// Result of the support-proximity check.
#[derive(Debug, Clone)]
pub struct ProximityCheck {
    pub passed: bool,
    pub nearest_support: Option<f64>,
    pub distance_pct: Option<f64>,
    pub reason: String,
}

/// Finds local extrema in a close series and classifies proximity of a
/// current price to the detected supports.
#[derive(Debug, Clone)]
pub struct SupportResistanceDetector {
    config: SrConfig,
    supports: Vec<ExtremaLevel>,
    resistances: Vec<ExtremaLevel>,
}

impl SupportResistanceDetector {
    /// Detect, grade, and cluster levels from full bars: extrema come from
    /// closes, touch strength from bar high/low wicks entering the band.
    pub fn from_series(series: &PriceSeries, config: SrConfig) -> Self {
        let closes = series.closes();
        let ranges: Vec<(f64, f64)> = series.bars().iter().map(|b| (b.high, b.low)).collect();
        Self::build(&closes, &ranges, config)
    }

    /// Close-only variant; each close stands in for its bar's whole range.
    pub fn from_closes(closes: &[f64], config: SrConfig) -> Self {
        let ranges: Vec<(f64, f64)> = closes.iter().map(|&c| (c, c)).collect();
        Self::build(closes, &ranges, config)
    }

    fn build(closes: &[f64], ranges: &[(f64, f64)], config: SrConfig) -> Self {
        let cutoff = closes.len().saturating_sub(config.recency_window);

        let supports =
            Self::build_levels(closes, ranges, &config, cutoff, Extremum::Minimum, LevelKind::Support);
        let resistances =
            Self::build_levels(closes, ranges, &config, cutoff, Extremum::Maximum, LevelKind::Resistance);

        Self { config, supports, resistances }
    }

    fn build_levels(
        closes: &[f64],
        ranges: &[(f64, f64)],
        config: &SrConfig,
        cutoff: usize,
        kind: Extremum,
        level_kind: LevelKind,
    ) -> Vec<ExtremaLevel> {
        let raw: Vec<(f64, usize)> = local_extrema(closes, config.order, kind)
            .into_iter()
            .filter(|&i| i >= cutoff)
            .map(|i| {
                let price = closes[i];
                (price, count_touches(price, ranges, config.touch_tolerance))
            })
            .collect();
        cluster_levels(raw, config.cluster_tolerance, level_kind)
    }

    pub fn supports(&self) -> &[ExtremaLevel] {
        &self.supports
    }

    pub fn resistances(&self) -> &[ExtremaLevel] {
        &self.resistances
    }

    /// The highest detected support strictly below `price`.
    pub fn find_nearest_support(&self, price: f64) -> Option<f64> {
        self.supports
            .iter()
            .map(|l| l.price)
            .filter(|&s| s < price)
            .fold(None, |best, s| match best {
                Some(b) if b >= s => Some(b),
                _ => Some(s),
            })
    }

    /// Pass iff `price` sits no more than `threshold_pct` percent above the
    /// nearest support. No support at all passes through ("no nearby support,
    /// not blocking"), and a price already below its nearest support also
    /// passes: the check only ever fails on "too far above".
    pub fn support_proximity(&self, price: f64, threshold_pct: f64) -> ProximityCheck {
        let Some(nearest) = self.find_nearest_support(price) else {
            return ProximityCheck {
                passed: true,
                nearest_support: None,
                distance_pct: None,
                reason: "no support below price (new-high territory or thin history)".to_string(),
            };
        };

        let distance_pct = (price - nearest) / nearest * 100.0;
        if distance_pct <= threshold_pct {
            ProximityCheck {
                passed: true,
                nearest_support: Some(nearest),
                distance_pct: Some(distance_pct),
                reason: format!("near support {:.2} ({:+.1}%)", nearest, distance_pct),
            }
        } else {
            ProximityCheck {
                passed: false,
                nearest_support: Some(nearest),
                distance_pct: Some(distance_pct),
                reason: format!("extended {:.1}% above support {:.2}", distance_pct, nearest),
            }
        }
    }

    pub fn config(&self) -> &SrConfig {
        &self.config
    }
}

/// Bars whose high or low enters the tolerance band around the level.
fn count_touches(level: f64, ranges: &[(f64, f64)], tolerance: f64) -> usize {
    let band = level * tolerance;
    ranges
        .iter()
        .filter(|&&(high, low)| (high - level).abs() <= band || (low - level).abs() <= band)
        .count()
}

/// Merge levels lying within `tolerance` of the running cluster mean. The
/// merged price is the cluster mean; the merged strength is the maximum
/// touch-count strength among members.
fn cluster_levels(mut raw: Vec<(f64, usize)>, tolerance: f64, kind: LevelKind) -> Vec<ExtremaLevel> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out = Vec::new();
    let mut cluster: Vec<(f64, usize)> = vec![raw[0]];

    for &(price, touches) in &raw[1..] {
        let mean = cluster.iter().map(|(p, _)| p).sum::<f64>() / cluster.len() as f64;
        if (price - mean).abs() / mean <= tolerance {
            cluster.push((price, touches));
        } else {
            out.push(merge_cluster(&cluster, kind));
            cluster = vec![(price, touches)];
        }
    }
    out.push(merge_cluster(&cluster, kind));
    out
}

fn merge_cluster(cluster: &[(f64, usize)], kind: LevelKind) -> ExtremaLevel {
    let price = cluster.iter().map(|(p, _)| p).sum::<f64>() / cluster.len() as f64;
    let strength = cluster
        .iter()
        .map(|&(_, touches)| LevelStrength::from_touches(touches))
        .max()
        .unwrap_or(LevelStrength::Low);
    ExtremaLevel { price, strength, kind }
}
