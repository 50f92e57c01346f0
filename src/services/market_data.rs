//! Market data provider interface and failover composition.

use crate::models::market::MarketSnapshot;
use crate::services::synthetic::SyntheticMarketData;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("empty series for {0}")]
    EmptySeries(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the current price and historical window for a symbol.
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError>;
}

/// Wraps a primary provider and substitutes a synthetic-but-plausible series
/// on any failure, so the engine always receives a well-formed window. The
/// engine itself performs no retries and has no notion of timeout.
pub struct FailoverProvider<P> {
    primary: P,
    fallback: SyntheticMarketData,
}

impl<P: MarketDataProvider> FailoverProvider<P> {
    pub fn new(primary: P, fallback: SyntheticMarketData) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: MarketDataProvider> MarketDataProvider for FailoverProvider<P> {
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        match self.primary.snapshot(symbol).await {
            Ok(snapshot) if !snapshot.closes.is_empty() => Ok(snapshot),
            Ok(_) => {
                warn!(symbol = %symbol, "primary feed returned an empty series, substituting synthetic data");
                self.fallback.snapshot(symbol).await
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "primary feed failed, substituting synthetic data");
                self.fallback.snapshot(symbol).await
            }
        }
    }
}
