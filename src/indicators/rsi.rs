// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the SMA of the first `period`
//          gains / losses.
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.
// =============================================================================

/// Compute the full RSI series for the given `closes` and `period`.
///
/// The returned vector has the same length as `closes`. The warm-up prefix
/// `[0 .. period]` is NaN (undefined); the first defined value sits at index
/// `period`.
///
/// At the seed index a zero average loss defines RS as 0, which pins the
/// first RSI value at 0 even when every move was a gain (see DESIGN.md).
/// Later indices use the raw ratio: zero loss with positive gain reads 100,
/// zero loss with zero gain is undefined (NaN).
///
/// # Edge cases
/// - `period == 0` => `None`
/// - `closes.len() < period + 1` => `None` (need at least `period` deltas)
/// - A non-finite delta poisons both running averages, so every later entry
///   is undefined rather than silently counted as a zero move.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    // --- Compute price deltas ------------------------------------------------
    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // --- Seed averages with SMA of first `period` deltas ---------------------
    let (sum_gain, sum_loss) = deltas[..period].iter().fold((0.0_f64, 0.0_f64), |(g, l), &d| {
        if d > 0.0 {
            (g + d, l)
        } else {
            (g, l + d.abs())
        }
    });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    let mut result = vec![f64::NAN; closes.len()];

    // Seed index: RS is defined as 0 when the average loss is 0.
    let rs = if avg_loss == 0.0 { 0.0 } else { avg_gain / avg_loss };
    result[period] = 100.0 - 100.0 / (1.0 + rs);

    // --- Wilder's smoothing for subsequent values ----------------------------
    for i in (period + 1)..closes.len() {
        let delta = deltas[i - 1];
        let (gain, loss) = if !delta.is_finite() {
            (delta, delta)
        } else if delta > 0.0 {
            (delta, 0.0)
        } else {
            (0.0, -delta)
        };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        // Raw ratio: +inf when losses dry up (RSI 100), NaN when flat.
        let rs = avg_gain / avg_loss;
        result[i] = 100.0 - 100.0 / (1.0 + rs);
    }

    Some(result)
}

/// Return the most recent RSI value, or `None` when there is insufficient
/// data or the latest entry is undefined.
pub fn current_rsi(closes: &[f64], period: usize) -> Option<f64> {
    calculate_rsi(closes, period)?
        .last()
        .copied()
        .filter(|v| v.is_finite())
}
