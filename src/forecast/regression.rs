//! Single-feature ordinary least squares.

use crate::error::ForecastError;

/// Fitted `price = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Closed-form OLS fit: slope = Sxy / Sxx, intercept = ȳ - slope * x̄.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, ForecastError> {
        if x.len() != y.len() {
            return Err(ForecastError::DimensionMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(ForecastError::DegenerateDomain);
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(ForecastError::NonFiniteInput);
        }

        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxx, sxy) = x
            .iter()
            .zip(y.iter())
            .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
                let dx = xi - x_mean;
                (sxx + dx * dx, sxy + dx * (yi - y_mean))
            });

        if sxx == 0.0 {
            return Err(ForecastError::DegenerateDomain);
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ForecastError::NonFiniteFit);
        }

        Ok(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
