//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal_period) of the MACD line
//! Histogram = MACD - Signal

use crate::models::indicators::MacdIndicator;

pub const DEFAULT_MACD_PERIODS: (u32, u32, u32) = (12, 26, 9);

/// Calculate the latest MACD triple with a single incremental walk.
///
/// Both component EMAs are seeded at the first sample and folded over the
/// whole window; the signal line is the EMA of the per-index MACD series,
/// seeded at its first value. An empty window yields a zeroed triple.
pub fn calculate_macd(
    prices: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdIndicator {
    let period = Some((fast_period, slow_period, signal_period));
    if prices.is_empty() || fast_period == 0 || slow_period == 0 || signal_period == 0 {
        return MacdIndicator {
            macd: 0.0,
            signal: 0.0,
            histogram: 0.0,
            period,
        };
    }

    let k_fast = 2.0 / (fast_period as f64 + 1.0);
    let k_slow = 2.0 / (slow_period as f64 + 1.0);
    let k_signal = 2.0 / (signal_period as f64 + 1.0);

    let mut fast_ema = prices[0];
    let mut slow_ema = prices[0];
    let mut macd_line = fast_ema - slow_ema;
    let mut signal_line = macd_line;

    for &price in &prices[1..] {
        fast_ema = (price - fast_ema) * k_fast + fast_ema;
        slow_ema = (price - slow_ema) * k_slow + slow_ema;
        macd_line = fast_ema - slow_ema;
        signal_line = (macd_line - signal_line) * k_signal + signal_line;
    }

    MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
        period,
    }
}

/// Calculate MACD with the default periods (12, 26, 9).
pub fn calculate_macd_default(prices: &[f64]) -> MacdIndicator {
    let (fast, slow, signal) = DEFAULT_MACD_PERIODS;
    calculate_macd(prices, fast, slow, signal)
}
