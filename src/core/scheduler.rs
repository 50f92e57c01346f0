//! Cron-based scheduler driving per-symbol signal evaluation.

use crate::services::market_data::MarketDataProvider;
use crate::services::sink::SignalSink;
use crate::signals::engine::SignalEngine;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Translate an evaluation interval into a six-field cron expression.
pub fn cron_expression(interval_seconds: u64) -> String {
    if interval_seconds >= 60 {
        format!("0 */{} * * * *", interval_seconds / 60)
    } else {
        format!("*/{} * * * * *", interval_seconds)
    }
}

/// Periodically evaluates every configured symbol: fetch a snapshot, run
/// the engine, hand the signal to the sink. The engine stays
/// cadence-agnostic; cadence lives entirely here.
pub struct EvaluationScheduler {
    engine: Arc<SignalEngine>,
    provider: Arc<dyn MarketDataProvider>,
    sink: Arc<dyn SignalSink>,
    symbols: Vec<String>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl EvaluationScheduler {
    pub fn new(
        engine: Arc<SignalEngine>,
        provider: Arc<dyn MarketDataProvider>,
        sink: Arc<dyn SignalSink>,
        symbols: Vec<String>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        let cron_expr = cron_expression(interval_seconds);
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?symbols,
            strategy = engine.strategy_name(),
            "EvaluationScheduler: created"
        );

        Ok(Self {
            engine,
            provider,
            sink,
            symbols,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Evaluate every symbol once, immediately.
    pub async fn run_once(&self) {
        Self::evaluate_all(&self.engine, &*self.provider, &*self.sink, &self.symbols).await;
    }

    async fn evaluate_all(
        engine: &SignalEngine,
        provider: &dyn MarketDataProvider,
        sink: &dyn SignalSink,
        symbols: &[String],
    ) {
        for symbol in symbols {
            match provider.snapshot(symbol).await {
                Ok(snapshot) => {
                    let signal = engine.evaluate(&snapshot);
                    debug!(
                        symbol = %symbol,
                        direction = %signal.evaluation.direction,
                        strength = %signal.evaluation.strength,
                        confidence = signal.evaluation.confidence,
                        "EvaluationScheduler: evaluated {}",
                        symbol
                    );
                    sink.record(&signal).await;
                }
                // Reachable only with a bare provider; the failover wrapper
                // substitutes synthetic data before an error gets here.
                Err(e) => {
                    error!(
                        symbol = %symbol,
                        error = %e,
                        "EvaluationScheduler: snapshot failed for {}",
                        symbol
                    );
                }
            }
        }
    }

    /// Start the cadence loop.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let engine = self.engine.clone();
        let provider = self.provider.clone();
        let sink = self.sink.clone();
        let symbols = self.symbols.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("EvaluationScheduler: started, waiting for cron schedule");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                debug!(
                    symbol_count = symbols.len(),
                    "EvaluationScheduler: cron tick, evaluating {} symbols",
                    symbols.len()
                );
                Self::evaluate_all(&engine, &*provider, &*sink, &symbols).await;
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("EvaluationScheduler: started successfully");
        Ok(())
    }

    /// Stop the cadence loop.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("EvaluationScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
