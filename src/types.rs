// =============================================================================
// Shared types used across the Borealis signal engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Discrete trading bias derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalLabel {
    StrongSell,
    Sell,
    Neutral,
    Buy,
    StrongBuy,
}

impl SignalLabel {
    /// Map a composite score to its label.
    ///
    /// Bands (inclusive lower bound): [80, 100] StrongBuy, [60, 80) Buy,
    /// [40, 60) Neutral, [20, 40) Sell, [0, 20) StrongSell. Scores outside
    /// [0, 100] fall into the nearest band so the mapping is total.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::StrongBuy
        } else if score >= 60.0 {
            Self::Buy
        } else if score >= 40.0 {
            Self::Neutral
        } else if score >= 20.0 {
            Self::Sell
        } else {
            Self::StrongSell
        }
    }
}

impl Default for SignalLabel {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for SignalLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongSell => write!(f, "STRONG_SELL"),
            Self::Sell => write!(f, "SELL"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Buy => write!(f, "BUY"),
            Self::StrongBuy => write!(f, "STRONG_BUY"),
        }
    }
}
