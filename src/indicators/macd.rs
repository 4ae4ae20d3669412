// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD tracks the spread between a fast and a slow EMA. A second EMA over the
// MACD line (the signal line) smooths it further; the histogram is the spread
// between the two and flags momentum shifts when it changes direction.
//
//   macd      = EMA(close, fast) - EMA(close, slow)
//   signal    = EMA(macd, signal_period)
//   histogram = macd - signal
// =============================================================================

use crate::indicators::ema::calculate_ema;

/// The three MACD output lines, each index-aligned with the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD, signal, and histogram series for the given closes.
///
/// All three vectors have the same length as `closes`; warm-up entries carry
/// the seed values of the underlying EMAs.
///
/// # Edge cases
/// - `closes.len() < slow` => `None` (the slow EMA needs the most history)
/// - Any zero period => `None` via the underlying EMA guard.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<MacdSeries> {
    if closes.len() < slow {
        return None;
    }

    let fast_ema = calculate_ema(closes, fast)?;
    let slow_ema = calculate_ema(closes, slow)?;

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal = calculate_ema(&macd, signal_period)?;

    let histogram: Vec<f64> = macd
        .iter()
        .zip(signal.iter())
        .map(|(m, s)| m - s)
        .collect();

    Some(MacdSeries {
        macd,
        signal,
        histogram,
    })
}
