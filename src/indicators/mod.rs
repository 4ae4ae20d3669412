// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the core technical indicators
// used by the signal engine. Every series function returns `Option<T>` so
// callers are forced to handle insufficient-history scenarios, and every
// available series is index-aligned with its input.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod trend;
