//! REST candle feed with exponential-backoff retry.

use crate::models::market::MarketSnapshot;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CandleRow {
    high: f64,
    low: f64,
    close: f64,
}

/// Fetches `GET {base_url}/candles?symbol=..&limit=..` returning a JSON
/// array of `{high, low, close}` rows, oldest first.
pub struct RestMarketData {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
    max_retries: usize,
    min_retry_delay: Duration,
}

impl RestMarketData {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            limit: 100,
            max_retries: 3,
            min_retry_delay: Duration::from_millis(250),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_retries(mut self, max_retries: usize, min_retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.min_retry_delay = min_retry_delay;
        self
    }

    async fn fetch(&self, symbol: &str) -> Result<Vec<CandleRow>, MarketDataError> {
        let url = format!(
            "{}/candles?symbol={}&limit={}",
            self.base_url, symbol, self.limit
        );
        let rows = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CandleRow>>()
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl MarketDataProvider for RestMarketData {
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.min_retry_delay)
            .with_max_times(self.max_retries);
        let rows = (|| self.fetch(symbol)).retry(backoff).await?;

        if rows.is_empty() {
            return Err(MarketDataError::EmptySeries(symbol.to_string()));
        }
        if rows
            .iter()
            .any(|r| !r.high.is_finite() || !r.low.is_finite() || !r.close.is_finite())
        {
            return Err(MarketDataError::Malformed(format!(
                "non-finite candle values for {}",
                symbol
            )));
        }

        debug!(symbol = %symbol, count = rows.len(), "fetched candles");

        let price = rows.last().map(|r| r.close).unwrap_or_default();
        let closes = rows.iter().map(|r| r.close).collect();
        let highs = rows.iter().map(|r| r.high).collect();
        let lows = rows.iter().map(|r| r.low).collect();

        Ok(MarketSnapshot::new(symbol, price, closes).with_range(highs, lows))
    }
}
