//! Unit tests for the RSI indicator

use marketpulse::indicators::momentum::rsi::{calculate_rsi, calculate_rsi_default};

#[test]
fn under_length_window_returns_neutral() {
    // period 14 needs 15 samples
    let prices = vec![1.0; 14];
    assert_eq!(calculate_rsi_default(&prices), 50.0);
    assert_eq!(calculate_rsi(&[], 14), 50.0);
}

#[test]
fn flat_window_reads_neutral() {
    let prices = vec![1.1; 50];
    assert_eq!(calculate_rsi_default(&prices), 50.0);
}

#[test]
fn all_gains_saturate_at_100() {
    let prices = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(calculate_rsi(&prices, 3), 100.0);
}

#[test]
fn all_losses_floor_at_0() {
    let prices = [4.0, 3.0, 2.0, 1.0];
    assert_eq!(calculate_rsi(&prices, 3), 0.0);
}

#[test]
fn mixed_window_matches_formula() {
    // deltas +1, -1, +1 -> avg gain 2/3, avg loss 1/3 -> RS 2 -> 100 - 100/3
    let prices = [1.0, 2.0, 1.0, 2.0];
    let rsi = calculate_rsi(&prices, 3);
    assert!((rsi - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
}

#[test]
fn invariant_under_proportional_scaling() {
    let prices: Vec<f64> = vec![
        10.0, 12.0, 9.0, 14.0, 13.0, 15.0, 11.0, 16.0, 14.5, 17.0, 16.0, 18.0, 15.0, 19.0, 18.5,
        20.0,
    ];
    let doubled: Vec<f64> = prices.iter().map(|p| p * 2.0).collect();
    assert_eq!(calculate_rsi_default(&prices), calculate_rsi_default(&doubled));
}

#[test]
fn only_the_first_period_transitions_are_observed() {
    // 14 rising transitions, then a crash the window must not see
    let mut prices: Vec<f64> = (0..15).map(f64::from).collect();
    prices.push(0.0);
    prices.push(0.0);
    assert_eq!(calculate_rsi_default(&prices), 100.0);
}

#[test]
fn bounded_between_0_and_100() {
    let series: [&[f64]; 3] = [
        &[5.0, 4.0, 6.0, 3.0, 7.0, 2.0, 8.0, 1.0, 9.0, 0.5, 10.0, 0.25, 11.0, 0.125, 12.0],
        &[100.0, 100.5, 99.5, 101.0, 98.0, 102.0, 97.0, 103.0, 96.0, 104.0, 95.0, 105.0, 94.0,
            106.0, 93.0],
        &[1.0, 1.0001, 0.9999, 1.0002, 0.9998, 1.0003, 0.9997, 1.0004, 0.9996, 1.0005, 0.9995,
            1.0006, 0.9994, 1.0007, 0.9993],
    ];
    for prices in series {
        let rsi = calculate_rsi_default(prices);
        assert!((0.0..=100.0).contains(&rsi), "rsi {} out of bounds", rsi);
    }
}
