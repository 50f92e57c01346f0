//! External collaborators: price feeds and signal sinks.

pub mod market_data;
pub mod rest;
pub mod sink;
pub mod synthetic;

pub use market_data::{FailoverProvider, MarketDataError, MarketDataProvider};
pub use rest::RestMarketData;
pub use sink::{LogSink, MemorySink, SignalSink};
pub use synthetic::SyntheticMarketData;
