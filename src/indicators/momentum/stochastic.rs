//! Stochastic Oscillator (%K/%D)
//!
//! Raw %K compares the close against its recent high-low range; slow-
//! stochastic convention smooths %K before deriving %D from it.

use crate::models::indicators::StochasticIndicator;

pub const DEFAULT_STOCHASTIC_PERIOD: u32 = 14;
pub const DEFAULT_STOCHASTIC_SMOOTH: (u32, u32) = (3, 3);

/// Calculate the latest smoothed %K and %D.
///
/// Raw %K at index `i` is `100 * (close - lowest_low) / (highest_high -
/// lowest_low)` over the trailing `period` samples; a zero-width range reads
/// as the 50 midline. %K is the SMA(`smooth_k`) of the raw series and %D the
/// SMA(`smooth_d`) of %K. A window shorter than `period`, or mismatched
/// slice lengths, yields a zeroed pair.
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: u32,
    smooth_k: u32,
    smooth_d: u32,
) -> StochasticIndicator {
    let p = period as usize;
    let n = closes.len();
    if p == 0 || n < p || highs.len() != n || lows.len() != n {
        return StochasticIndicator {
            k: 0.0,
            d: 0.0,
            period,
        };
    }

    let mut raw = Vec::with_capacity(n - p + 1);
    for i in (p - 1)..n {
        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;
        for j in (i + 1 - p)..=i {
            lowest = lowest.min(lows[j]);
            highest = highest.max(highs[j]);
        }
        let range = highest - lowest;
        let value = if range == 0.0 {
            50.0
        } else {
            100.0 * (closes[i] - lowest) / range
        };
        raw.push(value);
    }

    let k_series = smooth(&raw, smooth_k as usize);
    let d_series = smooth(&k_series, smooth_d as usize);

    StochasticIndicator {
        k: k_series.last().copied().unwrap_or(0.0),
        d: d_series.last().copied().unwrap_or(0.0),
        period,
    }
}

/// Calculate the stochastic oscillator with defaults (14, 3, 3).
pub fn calculate_stochastic_default(highs: &[f64], lows: &[f64], closes: &[f64]) -> StochasticIndicator {
    let (smooth_k, smooth_d) = DEFAULT_STOCHASTIC_SMOOTH;
    calculate_stochastic(highs, lows, closes, DEFAULT_STOCHASTIC_PERIOD, smooth_k, smooth_d)
}

// Rolling mean; the window shrinks at the head so every index stays defined.
fn smooth(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.to_vec();
    }
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &values[start..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}
