//! Multi-indicator point-scoring strategy.
//!
//! Each indicator contributes signed points and additive confidence;
//! direction and strength come from the points total, confidence from the
//! accumulated sum plus a per-point bonus, clamped to [30, 95].

use super::Strategy;
use crate::indicators::momentum::macd::calculate_macd;
use crate::indicators::momentum::rsi::calculate_rsi;
use crate::indicators::momentum::stochastic::calculate_stochastic;
use crate::indicators::volatility::bollinger::calculate_bollinger_bands;
use crate::models::indicators::{IndicatorSet, RsiIndicator};
use crate::models::market::MarketSnapshot;
use crate::models::signal::{SignalDirection, SignalEvaluation, SignalStrength};
use crate::signals::thresholds::SignalThresholds;

pub struct ConfluenceStrategy {
    thresholds: SignalThresholds,
}

impl ConfluenceStrategy {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    /// Compute the full indicator set for one snapshot. The four indicators
    /// are independent of one another; close-only feeds reuse the close
    /// series as the high/low rails for the stochastic.
    pub fn compute_indicators(&self, snapshot: &MarketSnapshot) -> IndicatorSet {
        let t = &self.thresholds;
        let closes = &snapshot.closes;
        let (fast, slow, signal) = t.macd_periods;
        let (smooth_k, smooth_d) = t.stochastic_smooth;

        let stochastic = if snapshot.has_range() {
            calculate_stochastic(
                &snapshot.highs,
                &snapshot.lows,
                closes,
                t.stochastic_period,
                smooth_k,
                smooth_d,
            )
        } else {
            calculate_stochastic(closes, closes, closes, t.stochastic_period, smooth_k, smooth_d)
        };

        IndicatorSet::new()
            .with_rsi(RsiIndicator {
                value: calculate_rsi(closes, t.rsi_period),
                period: Some(t.rsi_period),
            })
            .with_macd(calculate_macd(closes, fast, slow, signal))
            .with_bollinger(calculate_bollinger_bands(
                closes,
                t.bollinger_period,
                t.bollinger_std_dev,
            ))
            .with_stochastic(stochastic)
    }

    /// Accumulate points and confidence in a fixed order (RSI, MACD,
    /// Bollinger, Stochastic) so the result is bit-reproducible even when
    /// indicators were computed concurrently.
    pub fn score(&self, price: f64, indicators: &IndicatorSet) -> (i32, f64) {
        let t = &self.thresholds;
        let mut points = 0i32;
        let mut confidence = 50.0f64;

        if let Some(rsi) = &indicators.rsi {
            if rsi.value < t.rsi.oversold_extreme {
                points += 3;
                confidence += 20.0;
            } else if rsi.value < t.rsi.oversold {
                points += 2;
                confidence += 10.0;
            } else if rsi.value > t.rsi.overbought_extreme {
                points -= 3;
                confidence += 20.0;
            } else if rsi.value > t.rsi.overbought {
                points -= 2;
                confidence += 10.0;
            }
        }

        if let Some(macd) = &indicators.macd {
            if macd.macd > macd.signal && macd.histogram > 0.0 {
                points += 3;
                confidence += 15.0;
            } else if macd.macd < macd.signal && macd.histogram < 0.0 {
                points -= 3;
                confidence += 15.0;
            }
        }

        if let Some(bollinger) = &indicators.bollinger {
            if price < bollinger.lower {
                points += 2;
                confidence += 10.0;
            } else if price > bollinger.upper {
                points -= 2;
                confidence += 10.0;
            }
        }

        if let Some(stochastic) = &indicators.stochastic {
            let bands = &t.stochastic;
            if stochastic.k < bands.oversold && stochastic.d < bands.oversold {
                points += 2;
                confidence += 10.0;
            } else if stochastic.k > bands.overbought && stochastic.d > bands.overbought {
                points -= 2;
                confidence += 10.0;
            }
        }

        (points, confidence)
    }

    /// Direction and strength from the points total; cutoff boundaries are
    /// inclusive.
    pub fn classify_points(&self, points: i32) -> (SignalDirection, SignalStrength) {
        let cutoffs = &self.thresholds.points;
        if points >= cutoffs.strong_buy {
            (SignalDirection::Buy, SignalStrength::StrongBuy)
        } else if points >= cutoffs.buy {
            (SignalDirection::Buy, SignalStrength::Buy)
        } else if points <= cutoffs.strong_sell {
            (SignalDirection::Sell, SignalStrength::StrongSell)
        } else if points <= cutoffs.sell {
            (SignalDirection::Sell, SignalStrength::Sell)
        } else {
            (SignalDirection::Neutral, SignalStrength::Hold)
        }
    }
}

impl Strategy for ConfluenceStrategy {
    fn name(&self) -> &'static str {
        "confluence"
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> SignalEvaluation {
        let indicators = self.compute_indicators(snapshot);
        let (points, confidence) = self.score(snapshot.price, &indicators);
        let (direction, strength) = self.classify_points(points);
        let total = confidence + f64::from(points.abs()) * 3.0;

        SignalEvaluation {
            direction,
            strength,
            confidence: self.thresholds.confluence_confidence.clamp(total),
            points: Some(points),
            indicators: Some(indicators),
        }
    }
}
