use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked instrument. The ticker is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    pub ticker: String,
    pub name: String,
}

impl Instrument {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
        }
    }
}

/// One interval sample for an instrument. Only `close` feeds the forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self {
            timestamp,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Batched request handed to a market data provider once per cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarRequest {
    pub tickers: Vec<String>,
    /// Lookback window understood by the provider, e.g. `1d`.
    pub period: String,
    /// Sampling interval understood by the provider, e.g. `1m`.
    pub interval: String,
}

impl BarRequest {
    pub fn new(tickers: Vec<String>, period: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            tickers,
            period: period.into(),
            interval: interval.into(),
        }
    }
}
