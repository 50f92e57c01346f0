//! Signal output records.

use crate::models::indicators::IndicatorSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalDirection::Buy => "BUY",
            SignalDirection::Sell => "SELL",
            SignalDirection::Neutral => "NEUTRAL",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalStrength {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "WEAK BUY")]
    WeakBuy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WEAK SELL")]
    WeakSell,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SignalStrength::StrongBuy => "STRONG BUY",
            SignalStrength::Buy => "BUY",
            SignalStrength::WeakBuy => "WEAK BUY",
            SignalStrength::Hold => "HOLD",
            SignalStrength::WeakSell => "WEAK SELL",
            SignalStrength::Sell => "SELL",
            SignalStrength::StrongSell => "STRONG SELL",
        };
        write!(f, "{}", label)
    }
}

/// The pure outcome of a strategy evaluation. Deterministic: identical
/// inputs produce a field-for-field identical evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvaluation {
    pub direction: SignalDirection,
    pub strength: SignalStrength,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorSet>,
}

impl SignalEvaluation {
    /// The degraded output used during warm-up and for anomalous input.
    pub fn neutral(confidence: u8) -> Self {
        Self {
            direction: SignalDirection::Neutral,
            strength: SignalStrength::Hold,
            confidence,
            points: None,
            indicators: None,
        }
    }
}

/// Evaluation enveloped for delivery to a sink. Only the envelope carries a
/// timestamp; the evaluation itself stays reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub price: f64,
    pub strategy: String,
    #[serde(flatten)]
    pub evaluation: SignalEvaluation,
    pub timestamp: DateTime<Utc>,
}
