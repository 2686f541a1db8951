//! Per-instrument trend forecaster: min-max scaled time index -> close.

use super::history::History;
use super::normalizer::MinMaxScaler;
use super::regression::LinearModel;
use super::MIN_TRAINING_POINTS;
use crate::error::ForecastError;

/// Result of a successful `train` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainOutcome {
    /// History below the training threshold; nothing was touched.
    Skipped { len: usize },
    Fitted(LinearModel),
}

/// Scaler and model are always replaced together, so a failed refit keeps
/// the last good pair (stale but consistent).
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    scaler: MinMaxScaler,
    model: Option<LinearModel>,
}

impl Forecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refit from scratch over the full history.
    pub fn train(&mut self, history: &History) -> Result<TrainOutcome, ForecastError> {
        if history.len() < MIN_TRAINING_POINTS {
            return Ok(TrainOutcome::Skipped { len: history.len() });
        }

        let mut scaler = MinMaxScaler::new();
        let x = scaler.fit_transform(&history.indices())?;
        let model = LinearModel::fit(&x, &history.closes())?;

        self.scaler = scaler;
        self.model = Some(model);
        Ok(TrainOutcome::Fitted(model))
    }

    /// Predict the close at index `n`, one past the last observed bar.
    pub fn predict_next(&self, history: &History) -> Result<f64, ForecastError> {
        if history.len() < MIN_TRAINING_POINTS {
            return Err(ForecastError::InsufficientHistory {
                len: history.len(),
                required: MIN_TRAINING_POINTS,
            });
        }

        let model = self.model.ok_or(ForecastError::ModelNotFitted)?;
        let x = self.scaler.transform(history.len() as f64)?;
        let prediction = model.predict(x);

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ForecastError::NonFiniteFit)
        }
    }

    pub fn model(&self) -> Option<&LinearModel> {
        self.model.as_ref()
    }

    pub fn scaler(&self) -> &MinMaxScaler {
        &self.scaler
    }
}
