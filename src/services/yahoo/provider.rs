//! Yahoo Finance chart API market data provider

use futures_util::future::join_all;
use tracing::debug;

use super::messages::ChartResponse;
use crate::error::FetchError;
use crate::models::{Bar, BarRequest};
use crate::services::market_data::{BarsByTicker, MarketDataProvider};

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

// The chart endpoint rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct YahooMarketDataProvider {
    base_url: String,
    client: reqwest::Client,
}

impl YahooMarketDataProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_ticker(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<Bar>, FetchError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);

        let response = self
            .client
            .get(&url)
            .query(&[("range", period), ("interval", interval)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                ticker: ticker.to_string(),
                status: status.as_u16(),
            });
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(format!("{}: {}", ticker, e)))?;

        if let Some(err) = body.chart.error {
            return Err(FetchError::Decode(format!(
                "{}: {} {}",
                ticker,
                err.code,
                err.description.unwrap_or_default()
            )));
        }

        Ok(body
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_bars())
            .unwrap_or_default())
    }
}

impl Default for YahooMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn fetch_bars(&self, request: &BarRequest) -> Result<BarsByTicker, FetchError> {
        let fetches = request
            .tickers
            .iter()
            .map(|ticker| self.fetch_ticker(ticker, &request.period, &request.interval));
        let results = join_all(fetches).await;

        let mut bars_by_ticker = BarsByTicker::with_capacity(request.tickers.len());
        let mut transport_error = None;
        let mut status_error = None;
        let mut other_failures = 0usize;

        for (ticker, result) in request.tickers.iter().zip(results) {
            match result {
                Ok(bars) if bars.is_empty() => {
                    debug!(ticker = %ticker, "Yahoo: no bars returned for {}", ticker);
                    other_failures += 1;
                }
                Ok(bars) => {
                    debug!(ticker = %ticker, count = bars.len(), "Yahoo: fetched {} bars for {}", bars.len(), ticker);
                    bars_by_ticker.insert(ticker.clone(), bars);
                }
                Err(FetchError::Request(e)) => {
                    debug!(ticker = %ticker, error = %e, "Yahoo: request failed for {}", ticker);
                    transport_error.get_or_insert(FetchError::Request(e));
                }
                Err(e @ FetchError::Status { .. }) => {
                    debug!(ticker = %ticker, error = %e, "Yahoo: skipping {}", ticker);
                    status_error.get_or_insert(e);
                }
                Err(e) => {
                    debug!(ticker = %ticker, error = %e, "Yahoo: skipping {}", ticker);
                    other_failures += 1;
                }
            }
        }

        // A source that answered nothing usable for any ticker, through
        // transport or HTTP status failures only, is down as a whole.
        if bars_by_ticker.is_empty() && other_failures == 0 {
            if let Some(err) = transport_error.or(status_error) {
                return Err(err);
            }
        }

        Ok(bars_by_ticker)
    }
}
