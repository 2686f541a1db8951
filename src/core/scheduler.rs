//! Fixed-cadence driver for the cycle processor.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tracing::{debug, error, info};

use super::cycle::CycleProcessor;
use crate::config::MonitorConfig;
use crate::export::Exporter;
use crate::models::ResultBatch;

pub const DEFAULT_CADENCE: Duration = Duration::from_secs(5);
pub const DEFAULT_MIN_SLEEP: Duration = Duration::from_millis(100);

/// Sleep before the next cycle: `max(min_sleep, cadence - elapsed)`.
pub fn residual_sleep(elapsed: Duration, cadence: Duration, min_sleep: Duration) -> Duration {
    cadence.saturating_sub(elapsed).max(min_sleep)
}

/// Runs one cycle after another until cancelled. Cycles never overlap and a
/// cancellation is only honoured between cycles, after the current batch
/// has been exported.
pub struct CycleScheduler {
    processor: CycleProcessor,
    exporters: Vec<Box<dyn Exporter + Send + Sync>>,
    cadence: Duration,
    min_sleep: Duration,
}

impl CycleScheduler {
    /// Create a new scheduler with the default cadence and no exporters.
    pub fn new(processor: CycleProcessor) -> Self {
        Self {
            processor,
            exporters: Vec::new(),
            cadence: DEFAULT_CADENCE,
            min_sleep: DEFAULT_MIN_SLEEP,
        }
    }

    /// Create a scheduler using the configured cadence and sleep floor.
    pub fn from_config(processor: CycleProcessor, config: &MonitorConfig) -> Self {
        Self::new(processor).with_cadence(config.cadence, config.min_sleep)
    }

    /// Override the target cadence and the minimum sleep between cycles.
    pub fn with_cadence(mut self, cadence: Duration, min_sleep: Duration) -> Self {
        self.cadence = cadence;
        self.min_sleep = min_sleep;
        self
    }

    /// Add an exporter; exporters run in the order they were added.
    pub fn with_exporter(mut self, exporter: Box<dyn Exporter + Send + Sync>) -> Self {
        self.exporters.push(exporter);
        self
    }

    pub fn processor(&self) -> &CycleProcessor {
        &self.processor
    }

    /// Run until `shutdown` flips to `true` or its sender is dropped.
    /// Returns the number of completed cycles.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(
            cadence_ms = self.cadence.as_millis() as u64,
            instruments = self.processor.instruments().len(),
            "CycleScheduler: started"
        );

        let mut cycles = 0u64;
        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            let start = Instant::now();
            let batch = self.processor.run_cycle().await;
            self.export(&batch);
            cycles += 1;

            let elapsed = start.elapsed();
            let pause = residual_sleep(elapsed, self.cadence, self.min_sleep);
            info!(
                cycle = cycles,
                records = batch.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "CycleScheduler: cycle {} complete with {} records",
                cycles,
                batch.len()
            );

            let sender_gone = tokio::select! {
                _ = tokio::time::sleep(pause) => false,
                changed = shutdown.changed() => changed.is_err(),
            };
            if sender_gone {
                break;
            }
        }

        info!(cycles = cycles, "CycleScheduler: stopped after {} cycles", cycles);
        cycles
    }

    fn export(&self, batch: &ResultBatch) {
        if batch.is_empty() {
            debug!("CycleScheduler: empty batch, nothing to export");
            return;
        }

        for exporter in &self.exporters {
            if let Err(e) = exporter.export(batch) {
                error!(exporter = exporter.name(), error = %e, "CycleScheduler: export via {} failed", exporter.name());
            }
        }
    }
}
