//! External collaborators: market data sources.

pub mod market_data;
pub mod yahoo;

pub use market_data::{BarsByTicker, MarketDataProvider};
pub use yahoo::YahooMarketDataProvider;
