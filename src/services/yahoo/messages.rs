//! Wire types for the Yahoo Finance chart endpoint.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::Bar;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Seconds since the epoch, one per sample.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented samples; gaps in trading come through as `null`.
#[derive(Debug, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Zip timestamps with closes, dropping samples without a close.
    pub fn into_bars(self) -> Vec<Bar> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        let mut bars: Vec<Bar> = self
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let close = quote.close.get(i).copied().flatten()?;
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                let bar = Bar::new(timestamp, close);
                Some(match quote.volume.get(i).copied().flatten() {
                    Some(volume) => bar.with_volume(volume),
                    None => bar,
                })
            })
            .collect();

        bars.sort_by_key(|b| b.timestamp);
        bars
    }
}
