//! Signal delivery sinks.
//!
//! The surrounding system persists signals into a relational store with a
//! JSON column for the indicator payload; here that contract is only "the
//! record serializes to a flat set of numeric/string/nested-numeric fields".

use crate::models::signal::{Signal, SignalDirection};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

#[async_trait]
pub trait SignalSink: Send + Sync {
    /// Take ownership of a finished signal. Failures stay inside the sink;
    /// they never propagate back into the evaluation path.
    async fn record(&self, signal: &Signal);
}

/// Emits each signal as one structured log line with the full JSON payload.
pub struct LogSink;

#[async_trait]
impl SignalSink for LogSink {
    async fn record(&self, signal: &Signal) {
        let payload = match serde_json::to_string(signal) {
            Ok(payload) => payload,
            Err(e) => {
                error!(symbol = %signal.symbol, error = %e, "failed to serialize signal");
                return;
            }
        };

        if signal.evaluation.direction == SignalDirection::Neutral {
            debug!(
                symbol = %signal.symbol,
                strength = %signal.evaluation.strength,
                confidence = signal.evaluation.confidence,
                payload = %payload,
                "neutral signal"
            );
        } else {
            info!(
                symbol = %signal.symbol,
                direction = %signal.evaluation.direction,
                strength = %signal.evaluation.strength,
                confidence = signal.evaluation.confidence,
                payload = %payload,
                "signal"
            );
        }
    }
}

/// Retains signals in memory; the test double for the persistence layer.
#[derive(Clone, Default)]
pub struct MemorySink {
    signals: Arc<Mutex<Vec<Signal>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn drain(&self) -> Vec<Signal> {
        std::mem::take(&mut *self.signals.lock().await)
    }

    pub async fn len(&self) -> usize {
        self.signals.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.signals.lock().await.is_empty()
    }
}

#[async_trait]
impl SignalSink for MemorySink {
    async fn record(&self, signal: &Signal) {
        self.signals.lock().await.push(signal.clone());
    }
}
