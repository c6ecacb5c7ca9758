//! Dataset model

use super::QuarterRecord;
use serde::{Deserialize, Serialize};

/// Chronologically ordered quarterly records.
///
/// Insertion order is the time axis: index 0 is the oldest quarter and the
/// index of each record is its x coordinate for trend fitting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<QuarterRecord>,
}

impl Dataset {
    /// Create a dataset from records in chronological order.
    pub fn new(records: Vec<QuarterRecord>) -> Self {
        Self { records }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[QuarterRecord] {
        &self.records
    }

    /// Number of quarters.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no quarters.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Performance series.
    pub fn performance(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.performance).collect()
    }

    /// Benchmark series.
    pub fn benchmark(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.benchmark).collect()
    }

    /// Target series.
    pub fn targets(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.target).collect()
    }

    /// Quarter labels.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.quarter.as_str()).collect()
    }

    /// Most recent quarter.
    pub fn latest(&self) -> Option<&QuarterRecord> {
        self.records.last()
    }
}

impl FromIterator<QuarterRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = QuarterRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
