//! Synthetic price feed used in sandboxes and as the failover substitute.
//!
//! Base prices and volatility live here, in the collaborator, never in the
//! engine. Output is random but always well-formed: non-empty chronological
//! closes with aligned high/low rails.

use crate::models::market::MarketSnapshot;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;

const DEFAULT_BASE_PRICE: f64 = 100.0;
const DEFAULT_VOLATILITY: f64 = 0.005;
const DEFAULT_HISTORY_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct SyntheticMarketData {
    base_prices: HashMap<String, f64>,
    volatilities: HashMap<String, f64>,
    history_len: usize,
}

impl SyntheticMarketData {
    pub fn new() -> Self {
        Self::default()
            .with_symbol("BTC", 45_000.0, 0.02)
            .with_symbol("ETH", 2_500.0, 0.025)
            .with_symbol("SOL", 110.0, 0.03)
            .with_symbol("EURUSD", 1.10, 0.0008)
    }

    pub fn with_symbol(mut self, symbol: &str, base_price: f64, volatility: f64) -> Self {
        self.base_prices.insert(symbol.to_string(), base_price);
        self.volatilities.insert(symbol.to_string(), volatility);
        self
    }

    pub fn with_history_len(mut self, history_len: usize) -> Self {
        self.history_len = history_len.max(1);
        self
    }

    /// Random walk around the configured base price. Unknown symbols fall
    /// back to a generic base so the feed never refuses an instrument.
    pub fn generate(&self, symbol: &str) -> MarketSnapshot {
        let mut rng = rand::thread_rng();
        let base = *self.base_prices.get(symbol).unwrap_or(&DEFAULT_BASE_PRICE);
        let volatility = *self.volatilities.get(symbol).unwrap_or(&DEFAULT_VOLATILITY);

        let mut price = base;
        let mut closes = Vec::with_capacity(self.history_len);
        let mut highs = Vec::with_capacity(self.history_len);
        let mut lows = Vec::with_capacity(self.history_len);

        for _ in 0..self.history_len {
            let drift = rng.gen_range(-1.0..1.0) * volatility * price;
            // The walk stays positive and plausibly near the base.
            price = (price + drift).max(base * 0.5);
            let spread = rng.gen_range(0.0..=volatility) * price;
            closes.push(price);
            highs.push(price + spread);
            lows.push(price - spread);
        }

        MarketSnapshot::new(symbol, price, closes).with_range(highs, lows)
    }
}

impl Default for SyntheticMarketData {
    fn default() -> Self {
        Self {
            base_prices: HashMap::new(),
            volatilities: HashMap::new(),
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}

#[async_trait]
impl MarketDataProvider for SyntheticMarketData {
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        Ok(self.generate(symbol))
    }
}
