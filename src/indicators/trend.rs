// =============================================================================
// Trend Classifier — Slope Sign over a Rolling Window
// =============================================================================
//
// Classifies each index by the sign of the average slope across the trailing
// `period` closes:
//   slope = (window_last - window_first) / period
//   +1 rising, -1 falling, 0 flat or undefined.
// =============================================================================

/// Classify the trend at every index of `closes`.
///
/// The returned vector has the same length as the input; entries before the
/// first full window are 0 (flat/undefined). A non-finite slope also reads 0.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => `None`
pub fn calculate_trend(closes: &[f64], period: usize) -> Option<Vec<i8>> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let mut result = vec![0i8; closes.len()];
    for i in (period - 1)..closes.len() {
        let slope = (closes[i] - closes[i + 1 - period]) / period as f64;
        result[i] = if slope > 0.0 {
            1
        } else if slope < 0.0 {
            -1
        } else {
            0
        };
    }

    Some(result)
}

/// Return the most recent trend classification.
pub fn current_trend(closes: &[f64], period: usize) -> Option<i8> {
    calculate_trend(closes, period)?.last().copied()
}
