//! One refresh cycle: fetch, append, retrain, predict, report.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::config::MonitorConfig;
use crate::error::FetchError;
use crate::forecast::{HistoryStore, TrainOutcome};
use crate::models::{percent_change, Bar, BarRequest, Instrument, ResultBatch, ResultRecord};
use crate::services::market_data::MarketDataProvider;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs fetch, train and predict for every configured instrument, once per call.
pub struct CycleProcessor {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    instruments: Vec<Instrument>,
    store: HistoryStore,
    period: String,
    interval: String,
    fetch_timeout: Duration,
}

impl CycleProcessor {
    /// Create a new processor. Repeated tickers keep their first occurrence.
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        instruments: Vec<Instrument>,
        period: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        let mut seen = HashSet::with_capacity(instruments.len());
        let instruments: Vec<Instrument> = instruments
            .into_iter()
            .filter(|i| seen.insert(i.ticker.clone()))
            .collect();
        let store = HistoryStore::new(&instruments);
        Self {
            provider,
            instruments,
            store,
            period: period.into(),
            interval: interval.into(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Create a processor from the monitor configuration.
    pub fn from_config(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        config: &MonitorConfig,
    ) -> Self {
        Self::new(
            provider,
            config.instruments.clone(),
            config.lookback_period.clone(),
            config.sampling_interval.clone(),
        )
        .with_fetch_timeout(config.fetch_timeout)
    }

    /// Set the deadline for one batched data-source call.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Batched request covering every configured instrument.
    pub fn request(&self) -> BarRequest {
        BarRequest::new(
            self.instruments.iter().map(|i| i.ticker.clone()).collect(),
            self.period.clone(),
            self.interval.clone(),
        )
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Run one cycle, surfacing a data-source failure to the caller.
    ///
    /// On error nothing has been appended, so history and models are
    /// exactly as the previous cycle left them.
    pub async fn try_run_cycle(&mut self) -> Result<ResultBatch, FetchError> {
        let request = self.request();
        let response = tokio::time::timeout(self.fetch_timeout, self.provider.fetch_bars(&request))
            .await
            .map_err(|_| FetchError::Timeout(self.fetch_timeout))??;

        let mut records = Vec::with_capacity(self.instruments.len());
        for instrument in &self.instruments {
            match response.get(&instrument.ticker) {
                Some(bars) => {
                    if let Some(record) = process_bars(&mut self.store, instrument, bars) {
                        records.push(record);
                    }
                }
                None => {
                    debug!(ticker = %instrument.ticker, "CycleProcessor: {} missing from response", instrument.ticker);
                }
            }
        }

        Ok(ResultBatch::new(records))
    }

    /// Run one cycle; a data-source failure is logged and yields an empty batch.
    pub async fn run_cycle(&mut self) -> ResultBatch {
        match self.try_run_cycle().await {
            Ok(batch) => batch,
            Err(e) => {
                error!(error = %e, "CycleProcessor: failed to fetch market data: {}", e);
                ResultBatch::empty()
            }
        }
    }
}

/// Ingest one instrument's returned series and build its record.
///
/// Only the latest bar is appended to history; the previous bar of the same
/// series supplies the variation baseline. Returns `None` for an empty
/// series or an untracked instrument.
pub fn process_bars(
    store: &mut HistoryStore,
    instrument: &Instrument,
    bars: &[Bar],
) -> Option<ResultRecord> {
    let latest = bars.last()?;
    let ticker = instrument.ticker.as_str();

    store.append(ticker, latest.clone())?;
    let state = store.get_mut(ticker)?;

    match state.train() {
        Ok(TrainOutcome::Fitted(model)) => {
            debug!(ticker = %ticker, slope = model.slope, intercept = model.intercept, "Forecaster: refit {}", ticker);
        }
        Ok(TrainOutcome::Skipped { len }) => {
            debug!(ticker = %ticker, len = len, "Forecaster: {} below training threshold", ticker);
        }
        Err(e) => {
            warn!(ticker = %ticker, error = %e, "Forecaster: training failed for {}, keeping previous model", ticker);
        }
    }

    let prediction = match state.predict_next() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(ticker = %ticker, reason = %e, "Forecaster: no prediction for {}", ticker);
            None
        }
    };

    let variation_pct = match bars {
        [.., previous, current] => percent_change(previous.close, current.close),
        _ => None,
    };
    let error_pct = prediction.and_then(|p| percent_change(latest.close, p));

    Some(ResultRecord {
        ticker: instrument.ticker.clone(),
        name: instrument.name.clone(),
        last: latest.close,
        variation_pct,
        prediction,
        error_pct,
    })
}
