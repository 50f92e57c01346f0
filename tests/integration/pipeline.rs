//! End-to-end pipeline: provider -> engine -> sink

use async_trait::async_trait;
use marketpulse::core::scheduler::EvaluationScheduler;
use marketpulse::models::market::MarketSnapshot;
use marketpulse::services::market_data::{FailoverProvider, MarketDataError, MarketDataProvider};
use marketpulse::services::sink::MemorySink;
use marketpulse::services::synthetic::SyntheticMarketData;
use marketpulse::signals::engine::SignalEngine;
use marketpulse::signals::thresholds::SignalThresholds;
use marketpulse::strategies::StrategyKind;
use std::sync::Arc;

struct BrokenProvider;

#[async_trait]
impl MarketDataProvider for BrokenProvider {
    async fn snapshot(&self, symbol: &str) -> Result<MarketSnapshot, MarketDataError> {
        Err(MarketDataError::EmptySeries(symbol.to_string()))
    }
}

#[tokio::test]
async fn run_once_evaluates_every_symbol() {
    let engine = Arc::new(SignalEngine::new(
        StrategyKind::Confluence,
        SignalThresholds::default(),
    ));
    let sink = Arc::new(MemorySink::new());
    let symbols = vec!["BTC".to_string(), "ETH".to_string(), "SOL".to_string()];

    let scheduler = EvaluationScheduler::new(
        engine,
        Arc::new(SyntheticMarketData::new()),
        sink.clone(),
        symbols.clone(),
        60,
    )
    .expect("scheduler");

    scheduler.run_once().await;

    let signals = sink.drain().await;
    assert_eq!(signals.len(), symbols.len());
    for (signal, symbol) in signals.iter().zip(&symbols) {
        assert_eq!(&signal.symbol, symbol);
        assert_eq!(signal.strategy, "confluence");
        assert!((30..=95).contains(&signal.evaluation.confidence));
        assert!(signal.evaluation.indicators.is_some());
    }
}

#[tokio::test]
async fn failover_keeps_the_pipeline_flowing() {
    let engine = Arc::new(SignalEngine::new(
        StrategyKind::RsiMa,
        SignalThresholds::default(),
    ));
    let sink = Arc::new(MemorySink::new());
    let provider = Arc::new(FailoverProvider::new(
        BrokenProvider,
        SyntheticMarketData::new(),
    ));

    let scheduler = EvaluationScheduler::new(
        engine,
        provider,
        sink.clone(),
        vec!["BTC".to_string()],
        60,
    )
    .expect("scheduler");

    scheduler.run_once().await;

    let signals = sink.drain().await;
    assert_eq!(signals.len(), 1);
    assert!((20..=95).contains(&signals[0].evaluation.confidence));
}

#[tokio::test]
async fn signals_serialize_to_flat_json() {
    let engine = SignalEngine::new(StrategyKind::Confluence, SignalThresholds::default());
    let snapshot = SyntheticMarketData::new().generate("BTC");
    let signal = engine.evaluate(&snapshot);

    let value: serde_json::Value = serde_json::to_value(&signal).expect("serialize");
    assert!(value.get("symbol").is_some());
    assert!(value.get("price").is_some());
    assert!(value.get("direction").is_some());
    assert!(value.get("strength").is_some());
    assert!(value.get("confidence").is_some());
    assert!(value.get("timestamp").is_some());
    assert!(value.get("indicators").is_some());
}
