// =============================================================================
// Risk Assessor — Support/resistance and risk/reward from a trailing window
// =============================================================================
//
// Support is the minimum and resistance the maximum of the trailing
// `lookback` closes. For a candidate entry price:
//
//   risk   = entry - support
//   reward = resistance - entry
//   ratio  = reward / risk        (0 when risk is not positive)
//
// The assessor is total: degenerate windows, NaN gaps, and single-element
// series all produce a complete, finite result.
// =============================================================================

use serde::Serialize;
use tracing::debug;

/// Default trailing window for support/resistance detection.
pub const DEFAULT_LOOKBACK: usize = 50;

/// Support/resistance levels and risk/reward figures for a candidate entry.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub entry: f64,
    pub support: f64,
    pub resistance: f64,
    pub risk: f64,
    pub reward: f64,
    pub reward_risk_ratio: f64,
}

impl RiskAssessment {
    fn zeroed() -> Self {
        Self {
            entry: 0.0,
            support: 0.0,
            resistance: 0.0,
            risk: 0.0,
            reward: 0.0,
            reward_risk_ratio: 0.0,
        }
    }

    fn degenerate(entry: f64) -> Self {
        Self {
            entry,
            support: entry,
            resistance: entry,
            risk: 0.0,
            reward: 0.0,
            reward_risk_ratio: 0.0,
        }
    }
}

/// Assess risk/reward for `closes` at the given entry price.
///
/// `entry` defaults to the last close (falling back to the last finite close
/// when the series ends in a gap). The window is the trailing `lookback`
/// closes, clamped to the available history; non-finite closes are ignored
/// when searching for the extremes.
///
/// # Edge cases
/// - Empty series, or no finite price to anchor the entry => all-zero result.
/// - Window without finite closes => support = resistance = entry.
/// - `risk <= 0` => ratio 0 (no division); a negative reward also floors the
///   ratio at 0.
pub fn assess_risk(closes: &[f64], entry: Option<f64>, lookback: usize) -> RiskAssessment {
    if closes.is_empty() {
        debug!("risk assessment requested for empty series");
        return RiskAssessment::zeroed();
    }

    // Clamp the window to the available history.
    let window_len = lookback.min(closes.len()).max(1);
    let window = &closes[closes.len() - window_len..];

    let entry = entry
        .filter(|e| e.is_finite())
        .or_else(|| window.iter().rev().copied().find(|v| v.is_finite()));

    let entry = match entry {
        Some(e) => e,
        None => {
            debug!("risk assessment found no finite entry price");
            return RiskAssessment::zeroed();
        }
    };

    let mut support = f64::INFINITY;
    let mut resistance = f64::NEG_INFINITY;
    for &v in window {
        if v.is_finite() {
            support = support.min(v);
            resistance = resistance.max(v);
        }
    }

    if !support.is_finite() || !resistance.is_finite() {
        return RiskAssessment::degenerate(entry);
    }

    let risk = entry - support;
    let reward = resistance - entry;
    let reward_risk_ratio = if risk > 0.0 {
        (reward / risk).max(0.0)
    } else {
        0.0
    };

    debug!(
        entry,
        support,
        resistance,
        risk,
        reward,
        ratio = reward_risk_ratio,
        window = window_len,
        "risk assessment complete"
    );

    RiskAssessment {
        entry,
        support,
        resistance,
        risk,
        reward,
        reward_risk_ratio,
    }
}
