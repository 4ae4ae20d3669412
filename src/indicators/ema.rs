// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = close_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The recursion is seeded with the SMA of the first `period` closes; every
// output entry before the recursion starts carries that seed value, so the
// series stays index-aligned with the input.
// =============================================================================

/// Compute the EMA series for the given `closes` slice and look-back `period`.
///
/// The returned vector has the same length as `closes`. Entries at indices
/// `0..period` hold the SMA seed; from index `period` onward each entry is
/// the smoothed recursion over the previous value.
///
/// # Edge cases
/// - `period == 0` => `None` (division by zero guard)
/// - `closes.len() < period` => `None` (insufficient history)
/// - A non-finite close poisons the seed or the recursion from that index on;
///   callers read the series through a finite filter.
pub fn calculate_ema(closes: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let seed: f64 = closes[..period].iter().sum::<f64>() / period as f64;

    let mut result = vec![seed; closes.len()];
    let mut prev = seed;
    for i in period..closes.len() {
        let ema = closes[i] * multiplier + prev * (1.0 - multiplier);
        result[i] = ema;
        prev = ema;
    }

    Some(result)
}

/// Return the most recent EMA value, or `None` when the series is
/// unavailable or the latest entry is non-finite.
pub fn current_ema(closes: &[f64], period: usize) -> Option<f64> {
    calculate_ema(closes, period)?
        .last()
        .copied()
        .filter(|v| v.is_finite())
}
