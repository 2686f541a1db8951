//! Core application primitives (cycle processing and scheduling)

pub mod cycle;
pub mod scheduler;

pub use cycle::{process_bars, CycleProcessor};
pub use scheduler::{residual_sleep, CycleScheduler};
