//! Error taxonomy, one enum per containment scope.

use std::time::Duration;
use thiserror::Error;

/// Failure of a whole data-source call. Contained at the cycle boundary.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("data source did not answer within {0:?}")]
    Timeout(Duration),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("data source returned status {status} for {ticker}")]
    Status { ticker: String, status: u16 },

    #[error("could not decode data source response: {0}")]
    Decode(String),
}

/// Per-instrument training or prediction failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    #[error("history has {len} points, at least {required} are required")]
    InsufficientHistory { len: usize, required: usize },

    #[error("dimension mismatch: {x} inputs, {y} targets")]
    DimensionMismatch { x: usize, y: usize },

    #[error("time-index domain collapses to a single point")]
    DegenerateDomain,

    #[error("history contains a non-finite closing price")]
    NonFiniteInput,

    #[error("least-squares fit produced non-finite parameters")]
    NonFiniteFit,

    #[error("scaler has not been fitted")]
    ScalerNotFitted,

    #[error("model has not been fitted")]
    ModelNotFitted,
}

/// Downstream persistence failure. Never affects in-memory state.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
