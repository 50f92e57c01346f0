//! Named synthesis strategies behind a common interface.
//!
//! Two confidence-accumulation schemes coexist and are not numerically
//! reconcilable, so each lives in its own strategy instead of a merged one.

pub mod confluence;
pub mod rsi_ma;

pub use confluence::ConfluenceStrategy;
pub use rsi_ma::RsiMaStrategy;

use crate::models::market::MarketSnapshot;
use crate::models::signal::SignalEvaluation;
use crate::signals::thresholds::SignalThresholds;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A synthesis strategy turns one price window into one evaluation.
///
/// Implementations are pure functions of the snapshot: no shared mutable
/// state, safe to call concurrently across instruments.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, snapshot: &MarketSnapshot) -> SignalEvaluation;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// RSI bands plus moving-average overlays (the reduced configuration).
    RsiMa,
    /// Multi-indicator point scoring (the default).
    Confluence,
}

impl StrategyKind {
    pub fn build(self, thresholds: SignalThresholds) -> Box<dyn Strategy> {
        match self {
            StrategyKind::RsiMa => Box::new(RsiMaStrategy::new(thresholds)),
            StrategyKind::Confluence => Box::new(ConfluenceStrategy::new(thresholds)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rsi-ma" | "rsi_ma" => Ok(StrategyKind::RsiMa),
            "confluence" => Ok(StrategyKind::Confluence),
            other => Err(format!("unknown strategy '{}'", other)),
        }
    }
}
