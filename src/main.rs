use marketpulse::config::{Config, FeedKind};
use marketpulse::core::scheduler::EvaluationScheduler;
use marketpulse::logging::init_logging;
use marketpulse::services::market_data::{FailoverProvider, MarketDataProvider};
use marketpulse::services::rest::RestMarketData;
use marketpulse::services::sink::{LogSink, SignalSink};
use marketpulse::services::synthetic::SyntheticMarketData;
use marketpulse::signals::engine::SignalEngine;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(
        environment = %config.environment,
        symbols = ?config.symbols,
        strategy = ?config.strategy,
        interval = config.interval_seconds,
        "worker starting"
    );

    let provider: Arc<dyn MarketDataProvider> = match config.feed {
        FeedKind::Rest => {
            let url = config
                .feed_url
                .clone()
                .ok_or("MARKETPULSE_FEED_URL is required for the rest feed")?;
            Arc::new(FailoverProvider::new(
                RestMarketData::new(url),
                SyntheticMarketData::new(),
            ))
        }
        FeedKind::Synthetic => Arc::new(SyntheticMarketData::new()),
    };

    let engine = Arc::new(SignalEngine::new(config.strategy, config.thresholds.clone()));
    let sink: Arc<dyn SignalSink> = Arc::new(LogSink);

    let scheduler = EvaluationScheduler::new(
        engine,
        provider,
        sink,
        config.symbols.clone(),
        config.interval_seconds,
    )?;
    scheduler.start().await?;

    tokio::signal::ctrl_c().await?;
    scheduler.stop().await;
    info!("worker stopped");
    Ok(())
}
