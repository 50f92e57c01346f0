//! REST provider against a mock candles endpoint

use marketpulse::services::market_data::{FailoverProvider, MarketDataProvider};
use marketpulse::services::rest::RestMarketData;
use marketpulse::services::synthetic::SyntheticMarketData;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn candle_rows(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            json!({ "high": close + 0.3, "low": close - 0.3, "close": close })
        })
        .collect()
}

#[tokio::test]
async fn parses_candles_into_a_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candle_rows(30)))
        .mount(&server)
        .await;

    let provider = RestMarketData::new(server.uri()).with_limit(30);
    let snapshot = provider.snapshot("BTC").await.expect("snapshot");

    assert_eq!(snapshot.symbol, "BTC");
    assert_eq!(snapshot.closes.len(), 30);
    assert!(snapshot.has_range());
    assert_eq!(snapshot.price, *snapshot.closes.last().unwrap());
}

#[tokio::test]
async fn server_errors_surface_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider =
        RestMarketData::new(server.uri()).with_retries(1, Duration::from_millis(10));
    assert!(provider.snapshot("BTC").await.is_err());
}

#[tokio::test]
async fn failover_substitutes_synthetic_data_on_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let rest = RestMarketData::new(server.uri()).with_retries(1, Duration::from_millis(10));
    let provider = FailoverProvider::new(rest, SyntheticMarketData::new());
    let snapshot = provider.snapshot("BTC").await.expect("substituted snapshot");
    assert!(!snapshot.closes.is_empty());
    assert!(snapshot.closes.iter().all(|c| c.is_finite()));
}

#[tokio::test]
async fn empty_payload_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/candles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let provider =
        RestMarketData::new(server.uri()).with_retries(1, Duration::from_millis(10));
    assert!(provider.snapshot("BTC").await.is_err());
}
