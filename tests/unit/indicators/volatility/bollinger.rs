//! Unit tests for Bollinger Bands

use marketpulse::indicators::volatility::bollinger::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};

#[test]
fn under_length_window_yields_zeroed_triple() {
    let bands = calculate_bollinger_bands_default(&[1.0; 19]);
    assert_eq!(bands.upper, 0.0);
    assert_eq!(bands.middle, 0.0);
    assert_eq!(bands.lower, 0.0);
}

#[test]
fn zero_volatility_collapses_the_bands() {
    let prices = vec![2.0; 25];
    let bands = calculate_bollinger_bands_default(&prices);
    assert_eq!(bands.middle, 2.0);
    assert_eq!(bands.upper, 2.0);
    assert_eq!(bands.lower, 2.0);
}

#[test]
fn known_window_matches_population_std_dev() {
    // window [1, 1, 3, 3]: mean 2, population sigma 1, k = 2
    let prices = [10.0, 1.0, 1.0, 3.0, 3.0];
    let bands = calculate_bollinger_bands(&prices, 4, 2.0);
    assert_eq!(bands.middle, 2.0);
    assert_eq!(bands.upper, 4.0);
    assert_eq!(bands.lower, 0.0);
}

#[test]
fn higher_volatility_widens_the_bands() {
    let calm: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i % 2) * 0.1).collect();
    let wild: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i % 2) * 5.0).collect();
    let calm_bands = calculate_bollinger_bands_default(&calm);
    let wild_bands = calculate_bollinger_bands_default(&wild);
    assert!(wild_bands.upper - wild_bands.lower > calm_bands.upper - calm_bands.lower);
}
