//! Min-max scaling of the time-index feature.
//!
//! The scaler is refitted from the whole history on every training pass, so
//! its bounds move as the history grows and the same index can map to a
//! different value after a refit. `transform` does not clip: an index past
//! the fitted maximum maps above 1.0, which is what extrapolation needs.

use crate::error::ForecastError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MinMaxScaler {
    bounds: Option<(f64, f64)>,
}

impl MinMaxScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit bounds over `values`. On error the previous bounds are kept.
    pub fn fit(&mut self, values: &[f64]) -> Result<(), ForecastError> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteInput);
        }

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        // Empty input leaves min > max; a single point leaves min == max.
        if max <= min {
            return Err(ForecastError::DegenerateDomain);
        }

        self.bounds = Some((min, max));
        Ok(())
    }

    pub fn transform(&self, value: f64) -> Result<f64, ForecastError> {
        let (min, max) = self.bounds.ok_or(ForecastError::ScalerNotFitted)?;
        Ok((value - min) / (max - min))
    }

    pub fn fit_transform(&mut self, values: &[f64]) -> Result<Vec<f64>, ForecastError> {
        self.fit(values)?;
        values.iter().map(|&v| self.transform(v)).collect()
    }

    pub fn is_fitted(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn min(&self) -> Option<f64> {
        self.bounds.map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<f64> {
        self.bounds.map(|(_, max)| max)
    }
}
