//! Shared data models spanning the pipeline layers.

pub mod market;
pub mod record;

pub use market::{Bar, BarRequest, Instrument};
pub use record::{percent_change, ResultBatch, ResultRecord};
