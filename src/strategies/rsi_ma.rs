//! RSI + moving-average strategy.
//!
//! RSI bands pick the initial recommendation with a per-band confidence
//! formula; an SMA crossover overlay and an EMA trend overlay then adjust
//! or override it. Confidence clamps to [20, 95].

use super::Strategy;
use crate::indicators::momentum::rsi::calculate_rsi;
use crate::indicators::trend::ema::calculate_ema;
use crate::indicators::trend::sma::calculate_sma;
use crate::models::indicators::{EmaIndicator, IndicatorSet, RsiIndicator, SmaIndicator};
use crate::models::market::MarketSnapshot;
use crate::models::signal::{SignalDirection, SignalEvaluation, SignalStrength};
use crate::signals::thresholds::SignalThresholds;

pub struct RsiMaStrategy {
    thresholds: SignalThresholds,
}

impl RsiMaStrategy {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    /// Map an RSI value into its band. Bands are mutually exclusive and
    /// checked tightest first.
    pub fn band(&self, rsi: f64) -> (SignalDirection, SignalStrength, f64) {
        let bands = &self.thresholds.rsi;
        if rsi < bands.oversold_extreme {
            let confidence = 85.0 - (rsi / bands.oversold_extreme) * 35.0;
            (SignalDirection::Buy, SignalStrength::StrongBuy, confidence)
        } else if rsi < bands.oversold {
            let span = bands.oversold - bands.oversold_extreme;
            let confidence = 75.0 - ((rsi - bands.oversold_extreme) / span) * 25.0;
            (SignalDirection::Buy, SignalStrength::Buy, confidence)
        } else if rsi > bands.overbought_extreme {
            let span = 100.0 - bands.overbought_extreme;
            let confidence = 85.0 - ((100.0 - rsi) / span) * 35.0;
            (SignalDirection::Sell, SignalStrength::StrongSell, confidence)
        } else if rsi > bands.overbought {
            let span = bands.overbought_extreme - bands.overbought;
            let confidence = 75.0 - ((bands.overbought_extreme - rsi) / span) * 25.0;
            (SignalDirection::Sell, SignalStrength::Sell, confidence)
        } else {
            (SignalDirection::Neutral, SignalStrength::Hold, 50.0)
        }
    }
}

impl Strategy for RsiMaStrategy {
    fn name(&self) -> &'static str {
        "rsi-ma"
    }

    fn evaluate(&self, snapshot: &MarketSnapshot) -> SignalEvaluation {
        let t = &self.thresholds;
        let closes = &snapshot.closes;
        let price = snapshot.price;

        let rsi = calculate_rsi(closes, t.rsi_period);
        let sma_fast = calculate_sma(closes, t.sma_fast_period);
        let sma_slow = calculate_sma(closes, t.sma_slow_period);
        let ema_fast = calculate_ema(closes, t.ema_fast_period);
        let ema_slow = calculate_ema(closes, t.ema_slow_period);

        let (mut direction, mut strength, mut confidence) = self.band(rsi);

        // SMA crossover overlay: an agreeing crossover reinforces, a
        // disagreeing one overrides at reduced strength.
        if sma_fast > sma_slow && price > sma_fast {
            if direction == SignalDirection::Buy {
                confidence += 10.0;
            } else {
                direction = SignalDirection::Buy;
                strength = if confidence > 60.0 {
                    SignalStrength::Buy
                } else {
                    SignalStrength::WeakBuy
                };
            }
        } else if sma_fast < sma_slow && price < sma_fast {
            if direction == SignalDirection::Sell {
                confidence += 10.0;
            } else {
                direction = SignalDirection::Sell;
                strength = if confidence > 60.0 {
                    SignalStrength::Sell
                } else {
                    SignalStrength::WeakSell
                };
            }
        }

        // EMA trend overlay: only reinforces, never overrides.
        if ema_fast > ema_slow && direction == SignalDirection::Buy {
            confidence += 5.0;
        } else if ema_fast < ema_slow && direction == SignalDirection::Sell {
            confidence += 5.0;
        }

        let indicators = IndicatorSet::new()
            .with_rsi(RsiIndicator {
                value: rsi,
                period: Some(t.rsi_period),
            })
            .with_sma(SmaIndicator {
                value: sma_fast,
                period: t.sma_fast_period,
            })
            .with_sma(SmaIndicator {
                value: sma_slow,
                period: t.sma_slow_period,
            })
            .with_ema(EmaIndicator {
                value: ema_fast,
                period: t.ema_fast_period,
            })
            .with_ema(EmaIndicator {
                value: ema_slow,
                period: t.ema_slow_period,
            });

        SignalEvaluation {
            direction,
            strength,
            confidence: t.rsi_ma_confidence.clamp(confidence),
            points: None,
            indicators: Some(indicators),
        }
    }
}
