// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the rolling population standard
// deviation over the same trailing window.
//
// The warm-up prefix is edge-extended with the first valid SMA value and a
// zero σ, keeping all three series index-aligned with the input.
// =============================================================================

/// The three band series, each index-aligned with the input closes.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub middle: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Calculate Bollinger Bands for the given closing prices.
///
/// `middle[i]` is the SMA of the trailing `period` window for
/// `i >= period - 1`; earlier entries repeat the first valid SMA. The
/// standard deviation is zero until the first full window, so the bands
/// collapse onto the middle band during warm-up.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period` => `None`
/// - A non-finite close makes every window containing it undefined (NaN).
pub fn calculate_bollinger(closes: &[f64], period: usize, num_std: f64) -> Option<BollingerBands> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let n = closes.len();
    let mut middle = Vec::with_capacity(n);
    let mut upper = Vec::with_capacity(n);
    let mut lower = Vec::with_capacity(n);

    // Edge-extend the warm-up prefix with the first valid SMA.
    let first_sma = closes[..period].iter().sum::<f64>() / period as f64;
    for _ in 0..period - 1 {
        middle.push(first_sma);
        upper.push(first_sma);
        lower.push(first_sma);
    }

    for i in (period - 1)..n {
        let window = &closes[i + 1 - period..=i];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / period as f64;
        let std_dev = variance.sqrt();

        middle.push(mean);
        upper.push(mean + num_std * std_dev);
        lower.push(mean - num_std * std_dev);
    }

    Some(BollingerBands {
        middle,
        upper,
        lower,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bollinger_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert!(calculate_bollinger(&closes, 20, 2.0).is_none());
    }

    #[test]
    fn bollinger_period_zero() {
        assert!(calculate_bollinger(&[1.0, 2.0, 3.0], 0, 2.0).is_none());
    }

    #[test]
    fn bollinger_aligned_with_input() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let bands = calculate_bollinger(&closes, 20, 2.0).unwrap();
        assert_eq!(bands.middle.len(), closes.len());
        assert_eq!(bands.upper.len(), closes.len());
        assert_eq!(bands.lower.len(), closes.len());
    }

    #[test]
    fn bollinger_flat_market_collapses() {
        let closes = vec![100.0; 30];
        let bands = calculate_bollinger(&closes, 20, 2.0).unwrap();
        for i in 0..closes.len() {
            assert!((bands.middle[i] - 100.0).abs() < 1e-10);
            assert!((bands.upper[i] - 100.0).abs() < 1e-10);
            assert!((bands.lower[i] - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn bollinger_known_sigma() {
        // Classic population-σ data set: mean 5, σ 2.
        let closes = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = calculate_bollinger(&closes, 8, 2.0).unwrap();
        let last = closes.len() - 1;
        assert!((bands.middle[last] - 5.0).abs() < 1e-10);
        assert!((bands.upper[last] - 9.0).abs() < 1e-10);
        assert!((bands.lower[last] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn bollinger_warmup_prefix_edge_extended() {
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let bands = calculate_bollinger(&closes, 20, 2.0).unwrap();
        let first_valid = bands.middle[19];
        for i in 0..19 {
            assert!((bands.middle[i] - first_valid).abs() < 1e-10);
            assert!((bands.upper[i] - first_valid).abs() < 1e-10);
            assert!((bands.lower[i] - first_valid).abs() < 1e-10);
        }
    }

    #[test]
    fn bollinger_band_ordering() {
        // upper >= middle >= lower at every defined index, any data.
        let closes: Vec<f64> = (1..=60)
            .map(|x| 100.0 + (x as f64 * 0.3).sin() * 8.0)
            .collect();
        let bands = calculate_bollinger(&closes, 20, 2.0).unwrap();
        for i in 0..closes.len() {
            if bands.middle[i].is_finite() {
                assert!(bands.upper[i] >= bands.middle[i], "ordering broken at {i}");
                assert!(bands.middle[i] >= bands.lower[i], "ordering broken at {i}");
            }
        }
    }

    #[test]
    fn bollinger_nan_window_is_undefined() {
        let mut closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        closes[25] = f64::NAN;
        let bands = calculate_bollinger(&closes, 20, 2.0).unwrap();
        assert!(bands.middle.last().unwrap().is_nan());
        assert!(bands.upper.last().unwrap().is_nan());
    }
}
