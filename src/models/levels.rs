//! Support/resistance level models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LevelStrength {
    Low,
    Medium,
    High,
}

impl LevelStrength {
    /// Strength from touch count within the tolerance band. Touch count, not
    /// recency, is what grades a level.
    pub fn from_touches(touches: usize) -> Self {
        if touches >= 4 {
            Self::High
        } else if touches >= 2 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    Support,
    Resistance,
}

/// A price level derived from clustered local extrema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremaLevel {
    pub price: f64,
    pub strength: LevelStrength,
    pub kind: LevelKind,
}
