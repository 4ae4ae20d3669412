// =============================================================================
// Signals Module
// =============================================================================
//
// Signal processing for the engine:
// - Latest-reading extraction with non-finite filtering
// - Per-indicator sub-scores and the equal-weight composite score

pub mod score;

pub use score::{Reading, ScoreBreakdown, SignalScorer};
