//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (std_dev * population standard deviation)
//! Lower Band = Middle - (std_dev * population standard deviation)

use crate::models::indicators::BollingerBandsIndicator;

pub const DEFAULT_BOLLINGER_PERIOD: u32 = 20;
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands over the last `period` samples.
///
/// A window shorter than `period` yields a zeroed triple. Zero volatility
/// collapses all three bands onto the mean.
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: u32,
    std_dev: f64,
) -> BollingerBandsIndicator {
    let p = period as usize;
    if p == 0 || prices.len() < p {
        return BollingerBandsIndicator {
            upper: 0.0,
            middle: 0.0,
            lower: 0.0,
            period,
            std_dev,
        };
    }

    let window = &prices[prices.len() - p..];
    let middle = window.iter().sum::<f64>() / p as f64;
    let variance = window
        .iter()
        .map(|value| {
            let deviation = value - middle;
            deviation * deviation
        })
        .sum::<f64>()
        / p as f64;
    let band = std_dev * variance.sqrt();

    BollingerBandsIndicator {
        upper: middle + band,
        middle,
        lower: middle - band,
        period,
        std_dev,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ).
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> BollingerBandsIndicator {
    calculate_bollinger_bands(prices, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV)
}
