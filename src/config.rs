//! Environment-driven configuration.

use crate::signals::thresholds::SignalThresholds;
use crate::strategies::StrategyKind;
use std::env;

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Synthetic,
    Rest,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub symbols: Vec<String>,
    pub interval_seconds: u64,
    pub feed: FeedKind,
    pub feed_url: Option<String>,
    pub strategy: StrategyKind,
    pub thresholds: SignalThresholds,
}

impl Config {
    /// Read configuration from the environment, with defaults for every
    /// value. Thresholds can be overridden from a JSON file; omitted fields
    /// keep their defaults.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let environment = get_environment();

        let symbols: Vec<String> = env::var("MARKETPULSE_SYMBOLS")
            .unwrap_or_else(|_| "BTC,ETH".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let interval_seconds = env::var("MARKETPULSE_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let feed = match env::var("MARKETPULSE_FEED").as_deref() {
            Ok("rest") => FeedKind::Rest,
            _ => FeedKind::Synthetic,
        };
        let feed_url = env::var("MARKETPULSE_FEED_URL").ok();

        let strategy = match env::var("MARKETPULSE_STRATEGY") {
            Ok(raw) => raw.parse()?,
            Err(_) => StrategyKind::Confluence,
        };

        let thresholds = match env::var("MARKETPULSE_THRESHOLDS_PATH") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)?;
                serde_json::from_str(&raw)?
            }
            Err(_) => SignalThresholds::default(),
        };

        Ok(Self {
            environment,
            symbols,
            interval_seconds,
            feed,
            feed_url,
            strategy,
            thresholds,
        })
    }
}
