//! Rolling history, feature scaling and trend forecasting per instrument.

pub mod forecaster;
pub mod history;
pub mod normalizer;
pub mod regression;
pub mod state;

/// Minimum history length before a model is trained or queried.
pub const MIN_TRAINING_POINTS: usize = 10;

pub use forecaster::{Forecaster, TrainOutcome};
pub use history::History;
pub use normalizer::MinMaxScaler;
pub use regression::LinearModel;
pub use state::{HistoryStore, InstrumentState};
