//! Market data provider interface.

use std::collections::HashMap;

use crate::error::FetchError;
use crate::models::{Bar, BarRequest};

/// Bars per ticker, each series oldest first.
pub type BarsByTicker = HashMap<String, Vec<Bar>>;

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Fetch the intraday series for every ticker in `request` in one call.
    ///
    /// Tickers the source cannot serve are left out of the map; only a
    /// failure of the call as a whole is an error.
    async fn fetch_bars(&self, request: &BarRequest) -> Result<BarsByTicker, FetchError>;
}
