// =============================================================================
// Borealis — Technical-Analysis Indicator & Signal-Scoring Engine
// =============================================================================
//
// A pure computation library: close-price series in, indicator series,
// composite signal scores, and risk/reward figures out. Data fetching,
// presentation, caching, and alert delivery belong to the host application.
//
// Every estimator is a deterministic, side-effect-free function of its
// inputs; insufficient history and NaN gaps degrade to typed "unavailable"
// results instead of errors, so evaluation never fails.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
pub mod alerts;
pub mod analysis;
pub mod config;
pub mod indicators;
pub mod risk;
pub mod signals;
pub mod types;

pub use alerts::{evaluate_rsi_alert, AlertKind, RsiAlert};
pub use analysis::{AnalysisReport, Analyzer, IndicatorSnapshot};
pub use config::EngineConfig;
pub use risk::{assess_risk, RiskAssessment, DEFAULT_LOOKBACK};
pub use signals::{Reading, ScoreBreakdown, SignalScorer};
pub use types::SignalLabel;
