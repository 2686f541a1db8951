//! Append-only closing-price history for one instrument.

use crate::models::Bar;

/// Ordered bars for one instrument. Insertion order is the time axis, so
/// bars are never reordered, deduplicated or evicted.
#[derive(Debug, Clone, Default)]
pub struct History {
    bars: Vec<Bar>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one bar and return the new length.
    pub fn append(&mut self, bar: Bar) -> usize {
        self.bars.push(bar);
        self.bars.len()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Time-index domain `{0, .., n-1}` as floats, ready for scaling.
    pub fn indices(&self) -> Vec<f64> {
        (0..self.bars.len()).map(|i| i as f64).collect()
    }

    /// `(index, close)` pairs in insertion order.
    pub fn series(&self) -> Vec<(usize, f64)> {
        self.bars.iter().enumerate().map(|(i, b)| (i, b.close)).collect()
    }
}
