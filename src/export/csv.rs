//! Spreadsheet export: the latest batch, rewritten each cycle.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Exporter, MISSING};
use crate::error::ExportError;
use crate::models::ResultBatch;

pub const HEADERS: [&str; 6] = ["Ticker", "Name", "Last", "Variation%", "Prediction", "Error%"];

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn export(&self, batch: &ResultBatch) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = ::csv::Writer::from_writer(file);

        writer.write_record(HEADERS)?;
        for record in &batch.records {
            writer.write_record([
                record.ticker.clone(),
                record.name.clone(),
                record.last.to_string(),
                cell(record.variation_pct),
                cell(record.prediction),
                cell(record.error_pct),
            ])?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), rows = batch.len(), "CsvExporter: wrote {} rows", batch.len());
        Ok(())
    }
}
