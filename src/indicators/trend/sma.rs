//! SMA (Simple Moving Average) indicator

/// Arithmetic mean of the last `period` samples.
///
/// A window shorter than `period` falls back to the last price rather than
/// a partial average.
pub fn calculate_sma(prices: &[f64], period: u32) -> f64 {
    let period = period as usize;
    let Some(&last) = prices.last() else {
        return 0.0;
    };
    if period == 0 || prices.len() < period {
        return last;
    }

    let window = &prices[prices.len() - period..];
    window.iter().sum::<f64>() / period as f64
}
