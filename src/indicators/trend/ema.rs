//! EMA (Exponential Moving Average) indicator

/// Exponential moving average with multiplier `k = 2 / (period + 1)`.
///
/// The recurrence is seeded at the first sample and folded over the entire
/// window; `period` sets the multiplier and gates the fallback, never the
/// iteration bounds. A window shorter than `period` falls back to the last
/// price.
pub fn calculate_ema(prices: &[f64], period: u32) -> f64 {
    let Some(&last) = prices.last() else {
        return 0.0;
    };
    if period == 0 || prices.len() < period as usize {
        return last;
    }

    let k = 2.0 / (period as f64 + 1.0);
    let mut ema = prices[0];
    for &price in &prices[1..] {
        ema = (price - ema) * k + ema;
    }
    ema
}
