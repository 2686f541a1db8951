//! Human-readable cycle summary on stdout.

use chrono::Local;

use super::{Exporter, MISSING};
use crate::error::ExportError;
use crate::models::{ResultBatch, ResultRecord};

const COLUMNS: [&str; 5] = ["Name", "Last", "Variation%", "Prediction", "Error%"];

#[derive(Debug, Default)]
pub struct ConsolePrinter;

impl ConsolePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Completion line followed by the aligned table.
    pub fn render(&self, batch: &ResultBatch) -> String {
        let completed = batch.completed_at.with_timezone(&Local);
        let mut out = format!("\n{} - data updated\n", completed.format("%H:%M:%S"));
        out.push_str(&render_table(&batch.records));
        out
    }
}

pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{:.2}", v))
}

pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{:.2}%", v))
}

pub fn render_table(records: &[ResultRecord]) -> String {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                format_price(Some(r.last)),
                format_percent(r.variation_pct),
                format_price(r.prediction),
                format_percent(r.error_pct),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &COLUMNS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

// Names left-aligned, numbers right-aligned.
fn push_row(out: &mut String, row: &[String; 5], widths: &[usize; 5]) {
    let cells: Vec<String> = row
        .iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(i, (value, &width))| {
            let pad = width.saturating_sub(value.chars().count());
            if i == 0 {
                format!("{}{}", value, " ".repeat(pad))
            } else {
                format!("{}{}", " ".repeat(pad), value)
            }
        })
        .collect();
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}

impl Exporter for ConsolePrinter {
    fn name(&self) -> &str {
        "console"
    }

    fn export(&self, batch: &ResultBatch) -> Result<(), ExportError> {
        print!("{}", self.render(batch));
        Ok(())
    }
}
