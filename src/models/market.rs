//! Market data consumed by the engine.

use serde::{Deserialize, Serialize};

/// One instrument's current price plus its historical window, oldest first.
/// The feed contract is only "non-empty chronological numeric sequence";
/// authenticity and quality are the feed's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub price: f64,
    pub closes: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub highs: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub lows: Vec<f64>,
}

impl MarketSnapshot {
    pub fn new(symbol: impl Into<String>, price: f64, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            closes,
            highs: Vec::new(),
            lows: Vec::new(),
        }
    }

    pub fn with_range(mut self, highs: Vec<f64>, lows: Vec<f64>) -> Self {
        self.highs = highs;
        self.lows = lows;
        self
    }

    /// True when aligned high/low rails are available for the whole window.
    pub fn has_range(&self) -> bool {
        !self.highs.is_empty()
            && self.highs.len() == self.closes.len()
            && self.lows.len() == self.closes.len()
    }
}
