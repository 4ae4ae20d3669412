// =============================================================================
// Analysis Facade — One-call evaluation for host applications
// =============================================================================
//
// Runs every estimator over a close series and assembles an auditable,
// serializable report: latest indicator readings, the score breakdown, the
// risk assessment, and any triggered RSI alert.
//
// Pipeline:
//   1. Snapshot the latest defined value of each indicator
//   2. Run the signal scorer
//   3. Run the risk assessor on the trailing window
//   4. Evaluate RSI alert thresholds
//   5. Stamp the report with a UUID and an RFC 3339 timestamp
// =============================================================================

use serde::Serialize;
use tracing::info;

use crate::alerts::{evaluate_rsi_alert, RsiAlert};
use crate::config::EngineConfig;
use crate::indicators::bollinger::calculate_bollinger;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::current_rsi;
use crate::indicators::trend::current_trend;
use crate::risk::{assess_risk, RiskAssessment};
use crate::signals::{ScoreBreakdown, SignalScorer};

/// Latest defined value of each indicator; `None` marks an unavailable or
/// undefined reading.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<i8>,
}

/// Complete analysis record for one evaluation of one instrument.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier for this report (UUID v4).
    pub id: String,

    /// Instrument the report pertains to.
    pub symbol: String,

    /// ISO 8601 timestamp of when this report was created.
    pub created_at: String,

    /// Latest finite close, or 0 when the series holds none.
    pub price: f64,

    pub indicators: IndicatorSnapshot,
    pub scores: ScoreBreakdown,
    pub risk: RiskAssessment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<RsiAlert>,
}

pub struct Analyzer;

impl Analyzer {
    /// Evaluate `closes` for `symbol` and return the full report.
    ///
    /// Total over any input, including empty and NaN-laced series: scores
    /// degrade to neutral and risk figures to zero instead of failing.
    pub fn analyze(symbol: &str, closes: &[f64], config: &EngineConfig) -> AnalysisReport {
        let price = closes
            .iter()
            .rev()
            .copied()
            .find(|v| v.is_finite())
            .unwrap_or(0.0);

        let indicators = snapshot(closes, config);
        let scores = SignalScorer::score(closes, config);
        let risk = assess_risk(closes, None, config.risk_lookback);
        let alert = evaluate_rsi_alert(closes, config);

        info!(
            symbol,
            price,
            composite = scores.composite,
            label = %scores.label,
            ratio = risk.reward_risk_ratio,
            "analysis complete"
        );

        AnalysisReport {
            id: uuid::Uuid::new_v4().to_string(),
            symbol: symbol.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            price,
            indicators,
            scores,
            risk,
            alert,
        }
    }
}

fn last_finite(series: &[f64]) -> Option<f64> {
    series.last().copied().filter(|v| v.is_finite())
}

fn snapshot(closes: &[f64], config: &EngineConfig) -> IndicatorSnapshot {
    let rsi = current_rsi(closes, config.rsi_period);

    let macd = calculate_macd(
        closes,
        config.macd_fast,
        config.macd_slow,
        config.macd_signal,
    );
    let (macd_line, macd_signal, macd_histogram) = match &macd {
        Some(m) => (
            last_finite(&m.macd),
            last_finite(&m.signal),
            last_finite(&m.histogram),
        ),
        None => (None, None, None),
    };

    let bands = calculate_bollinger(closes, config.bollinger_period, config.bollinger_num_std);
    let (bollinger_middle, bollinger_upper, bollinger_lower) = match &bands {
        Some(b) => (
            last_finite(&b.middle),
            last_finite(&b.upper),
            last_finite(&b.lower),
        ),
        None => (None, None, None),
    };

    IndicatorSnapshot {
        rsi,
        macd: macd_line,
        macd_signal,
        macd_histogram,
        bollinger_middle,
        bollinger_upper,
        bollinger_lower,
        trend: current_trend(closes, config.trend_period),
    }
}
