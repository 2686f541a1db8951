//! Per-instrument mutable state keyed by ticker.

use std::collections::HashMap;

use super::forecaster::{Forecaster, TrainOutcome};
use super::history::History;
use crate::error::ForecastError;
use crate::models::{Bar, Instrument};

/// History, scaler and model of one instrument, owned together so the
/// forecaster can only ever see its own instrument's data.
#[derive(Debug, Clone)]
pub struct InstrumentState {
    pub instrument: Instrument,
    history: History,
    forecaster: Forecaster,
}

impl InstrumentState {
    /// Create empty state for `instrument`.
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            history: History::new(),
            forecaster: Forecaster::new(),
        }
    }

    /// Append one bar; returns the new history length.
    pub fn append(&mut self, bar: Bar) -> usize {
        self.history.append(bar)
    }

    /// Refit this instrument's forecaster on its own history.
    pub fn train(&mut self) -> Result<TrainOutcome, ForecastError> {
        self.forecaster.train(&self.history)
    }

    /// Predict the close one step past the last bar.
    pub fn predict_next(&self) -> Result<f64, ForecastError> {
        self.forecaster.predict_next(&self.history)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn forecaster(&self) -> &Forecaster {
        &self.forecaster
    }
}

/// Keyed store of every configured instrument's state.
///
/// Unknown tickers are rejected rather than created: the instrument set is
/// fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    states: HashMap<String, InstrumentState>,
}

impl HistoryStore {
    /// Create a new store with one empty state per distinct ticker.
    pub fn new(instruments: &[Instrument]) -> Self {
        let mut states = HashMap::with_capacity(instruments.len());
        for instrument in instruments {
            states
                .entry(instrument.ticker.clone())
                .or_insert_with(|| InstrumentState::new(instrument.clone()));
        }
        Self { states }
    }

    /// Append a bar to `ticker`'s history. Returns the new length, or
    /// `None` for a ticker that is not tracked.
    pub fn append(&mut self, ticker: &str, bar: Bar) -> Option<usize> {
        self.states.get_mut(ticker).map(|state| state.append(bar))
    }

    /// Current history length; zero for untracked tickers.
    pub fn length(&self, ticker: &str) -> usize {
        self.states.get(ticker).map_or(0, |state| state.history().len())
    }

    /// `(index, close)` pairs for `ticker`, empty for untracked tickers.
    pub fn series(&self, ticker: &str) -> Vec<(usize, f64)> {
        self.states
            .get(ticker)
            .map(|state| state.history().series())
            .unwrap_or_default()
    }

    pub fn get(&self, ticker: &str) -> Option<&InstrumentState> {
        self.states.get(ticker)
    }

    pub fn get_mut(&mut self, ticker: &str) -> Option<&mut InstrumentState> {
        self.states.get_mut(ticker)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
