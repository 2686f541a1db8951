//! Result sinks fed once per cycle.

pub mod console;
pub mod csv;

use crate::error::ExportError;
use crate::models::ResultBatch;

pub use self::console::ConsolePrinter;
pub use self::csv::CsvExporter;

/// Placeholder for absent values in rendered output.
pub const MISSING: &str = "N/A";

pub trait Exporter {
    fn name(&self) -> &str;

    fn export(&self, batch: &ResultBatch) -> Result<(), ExportError>;
}
