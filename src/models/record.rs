use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-instrument output of one cycle. Absent values stay `None` so that
/// exporters decide how to render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub ticker: String,
    pub name: String,
    pub last: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_pct: Option<f64>,
}

/// Everything one cycle produced, stamped with its completion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBatch {
    pub completed_at: DateTime<Utc>,
    pub records: Vec<ResultRecord>,
}

impl ResultBatch {
    pub fn new(records: Vec<ResultRecord>) -> Self {
        Self {
            completed_at: Utc::now(),
            records,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, ticker: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.ticker == ticker)
    }
}

/// Percent change from `previous` to `current`. `None` when undefined.
pub fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let pct = (current - previous) / previous * 100.0;
    pct.is_finite().then_some(pct)
}
