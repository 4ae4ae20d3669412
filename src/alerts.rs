// =============================================================================
// RSI Alerts — Overbought/oversold threshold detection
// =============================================================================
//
// Decides whether the latest RSI reading warrants a notification. Delivery
// (email, push, dashboard badge) is the host application's concern; only the
// decision predicate lives here.

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::rsi::current_rsi;

/// Which side of the band the RSI breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Overbought,
    Oversold,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overbought => write!(f, "OVERBOUGHT"),
            Self::Oversold => write!(f, "OVERSOLD"),
        }
    }
}

/// A triggered RSI alert: the reading and the threshold it crossed.
#[derive(Debug, Clone, Serialize)]
pub struct RsiAlert {
    pub kind: AlertKind,
    pub value: f64,
    pub threshold: f64,
}

/// Evaluate the latest RSI reading against the configured thresholds.
///
/// Returns `None` when the RSI is unavailable (insufficient history or an
/// undefined latest value) or sits inside the neutral band.
pub fn evaluate_rsi_alert(closes: &[f64], config: &EngineConfig) -> Option<RsiAlert> {
    let value = current_rsi(closes, config.rsi_period)?;

    let alert = if value > config.rsi_overbought {
        Some(RsiAlert {
            kind: AlertKind::Overbought,
            value,
            threshold: config.rsi_overbought,
        })
    } else if value < config.rsi_oversold {
        Some(RsiAlert {
            kind: AlertKind::Oversold,
            value,
            threshold: config.rsi_oversold,
        })
    } else {
        None
    };

    if let Some(ref a) = alert {
        debug!(kind = %a.kind, value = a.value, threshold = a.threshold, "rsi alert raised");
    }

    alert
}
