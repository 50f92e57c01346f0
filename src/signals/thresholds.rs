//! Tunable synthesis thresholds.
//!
//! Strategies receive every band, cutoff, and clamp bound through this
//! structure so deployments can tune behavior from a JSON file without
//! touching the algorithm body.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiBands {
    pub oversold_extreme: f64,
    pub oversold: f64,
    pub overbought: f64,
    pub overbought_extreme: f64,
}

impl Default for RsiBands {
    fn default() -> Self {
        Self {
            oversold_extreme: 25.0,
            oversold: 35.0,
            overbought: 65.0,
            overbought_extreme: 75.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticBands {
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for StochasticBands {
    fn default() -> Self {
        Self {
            oversold: 20.0,
            overbought: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointCutoffs {
    pub buy: i32,
    pub strong_buy: i32,
    pub sell: i32,
    pub strong_sell: i32,
}

impl Default for PointCutoffs {
    fn default() -> Self {
        Self {
            buy: 6,
            strong_buy: 8,
            sell: -6,
            strong_sell: -8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBounds {
    pub min: u8,
    pub max: u8,
}

impl ConfidenceBounds {
    /// Round to the nearest integer, then clamp into the bounds.
    pub fn clamp(&self, raw: f64) -> u8 {
        if raw.is_nan() {
            return self.min;
        }
        raw.round().clamp(f64::from(self.min), f64::from(self.max)) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    /// Evaluations with fewer history points degrade to the neutral signal.
    pub min_history: usize,
    pub rsi_period: u32,
    pub rsi: RsiBands,
    pub sma_fast_period: u32,
    pub sma_slow_period: u32,
    pub ema_fast_period: u32,
    pub ema_slow_period: u32,
    pub macd_periods: (u32, u32, u32),
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
    pub stochastic_period: u32,
    pub stochastic_smooth: (u32, u32),
    pub stochastic: StochasticBands,
    pub points: PointCutoffs,
    pub rsi_ma_confidence: ConfidenceBounds,
    pub confluence_confidence: ConfidenceBounds,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            min_history: 20,
            rsi_period: 14,
            rsi: RsiBands::default(),
            sma_fast_period: 20,
            sma_slow_period: 50,
            ema_fast_period: 12,
            ema_slow_period: 26,
            macd_periods: (12, 26, 9),
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            stochastic_period: 14,
            stochastic_smooth: (3, 3),
            stochastic: StochasticBands::default(),
            points: PointCutoffs::default(),
            rsi_ma_confidence: ConfidenceBounds { min: 20, max: 95 },
            confluence_confidence: ConfidenceBounds { min: 30, max: 95 },
        }
    }
}
