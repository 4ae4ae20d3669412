// =============================================================================
// Engine Configuration — Tunable indicator periods and signal thresholds
// =============================================================================
//
// Central configuration hub for the signal engine. Every tunable parameter
// lives here so that a host application can re-tune the engine from a JSON
// file without recompiling.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash. All fields carry `#[serde(default)]` so that adding new fields
// never breaks loading an older config file.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_rsi_period() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_num_std() -> f64 {
    2.0
}

fn default_trend_period() -> usize {
    20
}

fn default_risk_lookback() -> usize {
    50
}

fn default_rsi_overbought() -> f64 {
    70.0
}

fn default_rsi_oversold() -> f64 {
    30.0
}

// =============================================================================
// EngineConfig
// =============================================================================

/// Top-level configuration for the signal engine.
///
/// Every field has a serde default so that older JSON files missing new
/// fields will still deserialise correctly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // --- Indicator look-back periods -----------------------------------------

    /// RSI look-back period.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// MACD fast EMA period.
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// MACD slow EMA period.
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// MACD signal-line EMA period.
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    /// Bollinger Band SMA window.
    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Bollinger Band width in standard deviations.
    #[serde(default = "default_bollinger_num_std")]
    pub bollinger_num_std: f64,

    /// Trend classifier slope window.
    #[serde(default = "default_trend_period")]
    pub trend_period: usize,

    // --- Risk & alerting ------------------------------------------------------

    /// Trailing window used for support/resistance detection.
    #[serde(default = "default_risk_lookback")]
    pub risk_lookback: usize,

    /// RSI level above which a reading is treated as overbought.
    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// RSI level below which a reading is treated as oversold.
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            bollinger_period: default_bollinger_period(),
            bollinger_num_std: default_bollinger_num_std(),
            trend_period: default_trend_period(),
            risk_lookback: default_risk_lookback(),
            rsi_overbought: default_rsi_overbought(),
            rsi_oversold: default_rsi_oversold(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            rsi_period = config.rsi_period,
            risk_lookback = config.risk_lookback,
            "engine config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise engine config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "engine config saved (atomic)");
        Ok(())
    }
}
