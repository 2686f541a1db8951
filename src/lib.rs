//! Tickcast: per-instrument online price forecasting on a fixed refresh cadence.
//!
//! Each cycle pulls the latest intraday bars for a fixed set of instruments,
//! appends them to a rolling history, refits a linear trend per instrument and
//! reports the next-step prediction alongside the realised price.

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod forecast;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{ExportError, FetchError, ForecastError};
pub use models::{Bar, BarRequest, Instrument, ResultBatch, ResultRecord};
