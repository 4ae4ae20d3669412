// =============================================================================
// Signal Scorer — Equal-weight composite of four indicator readings
// =============================================================================
//
// Converts the latest reading of each indicator (RSI, MACD histogram,
// Bollinger position, trend direction) into a 0-100 sub-score and averages
// them into a composite score and a discrete label.
//
// The scorer is total: insufficient history, NaN gaps, or any other
// degenerate input degrade the affected sub-score to neutral (50) instead of
// failing, so every call returns a complete breakdown.
// =============================================================================

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::bollinger::calculate_bollinger;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::calculate_rsi;
use crate::indicators::trend::current_trend;
use crate::types::SignalLabel;

/// Latest reading of an indicator. Non-finite values never reach the
/// scoring rules; they collapse to `Unavailable` at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Available(f64),
    Unavailable,
}

impl Reading {
    /// Wrap a raw value, mapping non-finite to `Unavailable`.
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Available(value)
        } else {
            Self::Unavailable
        }
    }

    /// The last entry of an optional series, mapped through the finite
    /// filter.
    pub fn from_latest(series: Option<&[f64]>) -> Self {
        match series.and_then(|s| s.last()) {
            Some(&v) => Self::from_value(v),
            None => Self::Unavailable,
        }
    }
}

/// Per-indicator sub-scores, the composite, and the derived label.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub rsi_score: f64,
    pub macd_score: f64,
    pub bollinger_score: f64,
    pub trend_score: f64,
    pub composite: f64,
    pub label: SignalLabel,
}

pub struct SignalScorer;

impl SignalScorer {
    /// Score the given close series under the given configuration.
    ///
    /// Always returns a complete breakdown; every sub-score lies in
    /// [0, 100] and the composite is their arithmetic mean.
    pub fn score(closes: &[f64], config: &EngineConfig) -> ScoreBreakdown {
        // ── Latest indicator readings ────────────────────────────────────
        let rsi = Reading::from_latest(calculate_rsi(closes, config.rsi_period).as_deref());

        let macd = calculate_macd(
            closes,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );
        let (hist_last, hist_prev) = match &macd {
            Some(m) => {
                let h = &m.histogram;
                let last = Reading::from_latest(Some(h.as_slice()));
                let prev = if h.len() >= 2 {
                    Reading::from_value(h[h.len() - 2])
                } else {
                    Reading::Unavailable
                };
                (last, prev)
            }
            None => (Reading::Unavailable, Reading::Unavailable),
        };

        let price = Reading::from_latest(Some(closes));
        let bands = calculate_bollinger(closes, config.bollinger_period, config.bollinger_num_std);
        let (upper, lower) = match &bands {
            Some(b) => (
                Reading::from_latest(Some(b.upper.as_slice())),
                Reading::from_latest(Some(b.lower.as_slice())),
            ),
            None => (Reading::Unavailable, Reading::Unavailable),
        };

        let trend = current_trend(closes, config.trend_period);

        // ── Sub-scores ───────────────────────────────────────────────────
        let rsi_score = rsi_sub_score(rsi, config.rsi_overbought, config.rsi_oversold);
        let macd_score = macd_sub_score(hist_last, hist_prev);
        let bollinger_score = bollinger_sub_score(price, upper, lower);
        let trend_score = trend_sub_score(trend);

        // Equal 25% weighting of the four indicators.
        let composite = (rsi_score + macd_score + bollinger_score + trend_score) / 4.0;
        let label = SignalLabel::from_score(composite);

        debug!(
            rsi_score,
            macd_score,
            bollinger_score,
            trend_score,
            composite,
            label = %label,
            "signal scoring complete"
        );

        ScoreBreakdown {
            rsi_score,
            macd_score,
            bollinger_score,
            trend_score,
            composite,
            label,
        }
    }
}

// =============================================================================
// Sub-score rules
// =============================================================================

/// Overbought reads bearish (20), oversold reads bullish (80), else neutral.
fn rsi_sub_score(reading: Reading, overbought: f64, oversold: f64) -> f64 {
    match reading {
        Reading::Available(rsi) if rsi > overbought => 20.0,
        Reading::Available(rsi) if rsi < oversold => 80.0,
        _ => 50.0,
    }
}

/// A positive histogram that is still rising reads bullish (70); a
/// non-positive one that is still falling reads bearish (30). Without a
/// defined previous point the momentum direction is unknown: neutral.
fn macd_sub_score(last: Reading, prev: Reading) -> f64 {
    match (last, prev) {
        (Reading::Available(last), Reading::Available(prev)) if last > 0.0 && last > prev => 70.0,
        (Reading::Available(last), Reading::Available(prev)) if last <= 0.0 && last < prev => 30.0,
        _ => 50.0,
    }
}

/// Price above the upper band reads overbought (30), below the lower band
/// oversold (70), inside the bands neutral.
fn bollinger_sub_score(price: Reading, upper: Reading, lower: Reading) -> f64 {
    match (price, upper, lower) {
        (Reading::Available(p), Reading::Available(u), Reading::Available(l)) => {
            if p > u {
                30.0
            } else if p < l {
                70.0
            } else {
                50.0
            }
        }
        _ => 50.0,
    }
}

/// Rising trend 70, falling 30, flat or unavailable 50.
fn trend_sub_score(trend: Option<i8>) -> f64 {
    match trend {
        Some(1) => 70.0,
        Some(-1) => 30.0,
        _ => 50.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- Reading ---------------------------------------------------------

    #[test]
    fn reading_filters_non_finite() {
        assert_eq!(Reading::from_value(42.0), Reading::Available(42.0));
        assert_eq!(Reading::from_value(f64::NAN), Reading::Unavailable);
        assert_eq!(Reading::from_value(f64::INFINITY), Reading::Unavailable);
    }

    #[test]
    fn reading_takes_last_entry_only() {
        // A defined value earlier in the series must not mask an undefined
        // latest entry.
        let series = vec![10.0, 20.0, f64::NAN];
        assert_eq!(Reading::from_latest(Some(series.as_slice())), Reading::Unavailable);
        assert_eq!(Reading::from_latest(None), Reading::Unavailable);
        let empty: Vec<f64> = Vec::new();
        assert_eq!(Reading::from_latest(Some(empty.as_slice())), Reading::Unavailable);
    }

    // ---- Sub-score rules -------------------------------------------------

    #[test]
    fn rsi_sub_score_bands() {
        assert!((rsi_sub_score(Reading::Available(80.0), 70.0, 30.0) - 20.0).abs() < 1e-10);
        assert!((rsi_sub_score(Reading::Available(10.0), 70.0, 30.0) - 80.0).abs() < 1e-10);
        assert!((rsi_sub_score(Reading::Available(50.0), 70.0, 30.0) - 50.0).abs() < 1e-10);
        // Boundary readings are strictly inside the neutral band.
        assert!((rsi_sub_score(Reading::Available(70.0), 70.0, 30.0) - 50.0).abs() < 1e-10);
        assert!((rsi_sub_score(Reading::Available(30.0), 70.0, 30.0) - 50.0).abs() < 1e-10);
        assert!((rsi_sub_score(Reading::Unavailable, 70.0, 30.0) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn macd_sub_score_momentum() {
        let a = Reading::Available;
        // Positive and rising.
        assert!((macd_sub_score(a(2.0), a(1.0)) - 70.0).abs() < 1e-10);
        // Positive but fading.
        assert!((macd_sub_score(a(1.0), a(2.0)) - 50.0).abs() < 1e-10);
        // Negative and falling.
        assert!((macd_sub_score(a(-2.0), a(-1.0)) - 30.0).abs() < 1e-10);
        // Negative but recovering.
        assert!((macd_sub_score(a(-1.0), a(-2.0)) - 50.0).abs() < 1e-10);
        // Zero counts as the bearish side but needs to be falling.
        assert!((macd_sub_score(a(0.0), a(1.0)) - 30.0).abs() < 1e-10);
        // No previous point: direction unknown.
        assert!((macd_sub_score(a(2.0), Reading::Unavailable) - 50.0).abs() < 1e-10);
        assert!((macd_sub_score(Reading::Unavailable, a(1.0)) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn bollinger_sub_score_position() {
        let a = Reading::Available;
        assert!((bollinger_sub_score(a(110.0), a(105.0), a(95.0)) - 30.0).abs() < 1e-10);
        assert!((bollinger_sub_score(a(90.0), a(105.0), a(95.0)) - 70.0).abs() < 1e-10);
        assert!((bollinger_sub_score(a(100.0), a(105.0), a(95.0)) - 50.0).abs() < 1e-10);
        // Touching a band is not a breach.
        assert!((bollinger_sub_score(a(105.0), a(105.0), a(95.0)) - 50.0).abs() < 1e-10);
        assert!((bollinger_sub_score(Reading::Unavailable, a(105.0), a(95.0)) - 50.0).abs() < 1e-10);
        assert!((bollinger_sub_score(a(100.0), Reading::Unavailable, a(95.0)) - 50.0).abs() < 1e-10);
    }

    #[test]
    fn trend_sub_score_direction() {
        assert!((trend_sub_score(Some(1)) - 70.0).abs() < 1e-10);
        assert!((trend_sub_score(Some(-1)) - 30.0).abs() < 1e-10);
        assert!((trend_sub_score(Some(0)) - 50.0).abs() < 1e-10);
        assert!((trend_sub_score(None) - 50.0).abs() < 1e-10);
    }

    // ---- Scenarios -------------------------------------------------------

    #[test]
    fn score_constant_series_is_neutral() {
        // Flat market: the RSI goes undefined (zero gain, zero loss), the
        // bands collapse onto the price, the histogram is exactly zero, and
        // the trend reads flat. Every sub-score lands on 50.
        let closes = vec![100.0; 30];
        let breakdown = SignalScorer::score(&closes, &EngineConfig::default());

        assert!((breakdown.rsi_score - 50.0).abs() < 1e-10);
        assert!((breakdown.macd_score - 50.0).abs() < 1e-10);
        assert!((breakdown.bollinger_score - 50.0).abs() < 1e-10);
        assert!((breakdown.trend_score - 50.0).abs() < 1e-10);
        assert!((breakdown.composite - 50.0).abs() < 1e-10);
        assert_eq!(breakdown.label, SignalLabel::Neutral);
    }

    #[test]
    fn score_rising_series_blend() {
        // Thirty closes rising by 1 from 100: RSI pins at 100 (overbought,
        // 20), the trend reads up (70), the last price stays inside the
        // widening bands (50), and the positive histogram is no longer
        // rising (50). Composite = (20+50+50+70)/4 = 47.5.
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let breakdown = SignalScorer::score(&closes, &EngineConfig::default());

        assert!((breakdown.rsi_score - 20.0).abs() < 1e-10);
        assert!((breakdown.macd_score - 50.0).abs() < 1e-10);
        assert!((breakdown.bollinger_score - 50.0).abs() < 1e-10);
        assert!((breakdown.trend_score - 70.0).abs() < 1e-10);
        assert!((breakdown.composite - 47.5).abs() < 1e-10);
        assert_eq!(breakdown.label, SignalLabel::Neutral);
    }

    #[test]
    fn score_short_series_is_neutral() {
        // Three closes are shorter than every look-back period.
        let closes = vec![100.0, 101.0, 102.0];
        let breakdown = SignalScorer::score(&closes, &EngineConfig::default());

        assert!((breakdown.rsi_score - 50.0).abs() < 1e-10);
        assert!((breakdown.macd_score - 50.0).abs() < 1e-10);
        assert!((breakdown.bollinger_score - 50.0).abs() < 1e-10);
        assert!((breakdown.trend_score - 50.0).abs() < 1e-10);
        assert!((breakdown.composite - 50.0).abs() < 1e-10);
        assert_eq!(breakdown.label, SignalLabel::Neutral);
    }

    #[test]
    fn score_falling_series_reads_bearish() {
        // Sixty closes falling by 1: RSI pins at 0 (oversold, 80), trend
        // down (30), price rides the lower band without breaching it (50),
        // histogram settles negative but stops falling once the lag spread
        // stabilises (50).
        let closes: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
        let breakdown = SignalScorer::score(&closes, &EngineConfig::default());

        assert!((breakdown.rsi_score - 80.0).abs() < 1e-10);
        assert!((breakdown.trend_score - 30.0).abs() < 1e-10);
        assert!(breakdown.composite.is_finite());
        assert_eq!(
            breakdown.composite,
            (breakdown.rsi_score
                + breakdown.macd_score
                + breakdown.bollinger_score
                + breakdown.trend_score)
                / 4.0
        );
    }

    // ---- Robustness ------------------------------------------------------

    #[test]
    fn score_never_emits_non_finite() {
        let mut closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.5).sin()).collect();
        closes[40] = f64::NAN;
        closes[55] = f64::NAN;
        let breakdown = SignalScorer::score(&closes, &EngineConfig::default());

        for v in [
            breakdown.rsi_score,
            breakdown.macd_score,
            breakdown.bollinger_score,
            breakdown.trend_score,
            breakdown.composite,
        ] {
            assert!(v.is_finite());
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn score_empty_series_is_neutral() {
        let breakdown = SignalScorer::score(&[], &EngineConfig::default());
        assert!((breakdown.composite - 50.0).abs() < 1e-10);
        assert_eq!(breakdown.label, SignalLabel::Neutral);
    }

    #[test]
    fn score_composite_is_mean_of_subscores() {
        let closes: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 12.0)
            .collect();
        let b = SignalScorer::score(&closes, &EngineConfig::default());
        let mean = (b.rsi_score + b.macd_score + b.bollinger_score + b.trend_score) / 4.0;
        assert_eq!(b.composite, mean);
        assert_eq!(b.label, SignalLabel::from_score(b.composite));
    }

    #[test]
    fn score_is_deterministic() {
        let closes: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 1.3).cos() * 4.0).collect();
        let a = SignalScorer::score(&closes, &EngineConfig::default());
        let b = SignalScorer::score(&closes, &EngineConfig::default());
        assert_eq!(a.rsi_score, b.rsi_score);
        assert_eq!(a.macd_score, b.macd_score);
        assert_eq!(a.bollinger_score, b.bollinger_score);
        assert_eq!(a.trend_score, b.trend_score);
        assert_eq!(a.composite, b.composite);
        assert_eq!(a.label, b.label);
    }
}
