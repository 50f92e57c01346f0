//! Main signal evaluation engine.

use crate::models::market::MarketSnapshot;
use crate::models::signal::{Signal, SignalEvaluation};
use crate::signals::thresholds::SignalThresholds;
use crate::strategies::{Strategy, StrategyKind};
use chrono::Utc;

pub const NEUTRAL_CONFIDENCE: u8 = 50;

/// The single "evaluate now" entry point. Cadence-agnostic; callers decide
/// when to invoke it. Never panics and never returns an error: anomalous
/// input degrades to the neutral signal.
pub struct SignalEngine {
    strategy: Box<dyn Strategy>,
    min_history: usize,
}

impl SignalEngine {
    pub fn new(kind: StrategyKind, thresholds: SignalThresholds) -> Self {
        let min_history = thresholds.min_history;
        Self {
            strategy: kind.build(thresholds),
            min_history,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Evaluate one instrument and envelope the result for delivery.
    pub fn evaluate(&self, snapshot: &MarketSnapshot) -> Signal {
        let evaluation = self.evaluate_series(snapshot);
        Signal {
            symbol: snapshot.symbol.clone(),
            price: snapshot.price,
            strategy: self.strategy.name().to_string(),
            evaluation,
            timestamp: Utc::now(),
        }
    }

    /// The pure part of evaluation: identical snapshots yield identical
    /// results, field for field.
    pub fn evaluate_series(&self, snapshot: &MarketSnapshot) -> SignalEvaluation {
        if snapshot.closes.len() < self.min_history {
            return SignalEvaluation::neutral(NEUTRAL_CONFIDENCE);
        }
        if !snapshot.price.is_finite() || snapshot.closes.iter().any(|c| !c.is_finite()) {
            return SignalEvaluation::neutral(NEUTRAL_CONFIDENCE);
        }
        self.strategy.evaluate(snapshot)
    }
}
