//! Unit tests for the Stochastic Oscillator

use marketpulse::indicators::momentum::stochastic::{
    calculate_stochastic, calculate_stochastic_default,
};

#[test]
fn under_length_window_yields_zeroed_pair() {
    let flat = vec![1.0; 10];
    let stoch = calculate_stochastic_default(&flat, &flat, &flat);
    assert_eq!(stoch.k, 0.0);
    assert_eq!(stoch.d, 0.0);
}

#[test]
fn mismatched_slices_yield_zeroed_pair() {
    let closes = vec![1.0; 20];
    let shorter = vec![1.0; 19];
    let stoch = calculate_stochastic_default(&shorter, &closes, &closes);
    assert_eq!(stoch.k, 0.0);
    assert_eq!(stoch.d, 0.0);
}

#[test]
fn zero_width_range_reads_midline() {
    let flat = vec![5.0; 20];
    let stoch = calculate_stochastic_default(&flat, &flat, &flat);
    assert_eq!(stoch.k, 50.0);
    assert_eq!(stoch.d, 50.0);
}

#[test]
fn close_near_the_top_of_its_range() {
    let highs = [2.0, 3.0, 4.0];
    let lows = [0.0, 1.0, 2.0];
    let closes = [1.5, 2.5, 3.5];
    // window: high 4, low 0, close 3.5 -> 87.5
    let stoch = calculate_stochastic(&highs, &lows, &closes, 3, 1, 1);
    assert_eq!(stoch.k, 87.5);
    assert_eq!(stoch.d, 87.5);
}

#[test]
fn close_near_the_bottom_of_its_range() {
    let highs = [4.0, 3.0, 2.0];
    let lows = [2.0, 1.0, 0.0];
    let closes = [2.5, 1.5, 0.5];
    let stoch = calculate_stochastic(&highs, &lows, &closes, 3, 1, 1);
    assert_eq!(stoch.k, 12.5);
}

#[test]
fn smoothing_averages_the_raw_series() {
    // period 1 raw values: 50 and 75; %K smoothed over 2 -> 62.5
    let highs = [2.0, 4.0];
    let lows = [0.0, 0.0];
    let closes = [1.0, 3.0];
    let stoch = calculate_stochastic(&highs, &lows, &closes, 1, 2, 1);
    assert_eq!(stoch.k, 62.5);
    assert_eq!(stoch.d, 62.5);
}

#[test]
fn bounded_between_0_and_100() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 1.3).sin() * 5.0).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let stoch = calculate_stochastic_default(&highs, &lows, &closes);
    assert!((0.0..=100.0).contains(&stoch.k));
    assert!((0.0..=100.0).contains(&stoch.d));
}
