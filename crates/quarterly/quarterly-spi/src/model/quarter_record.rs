//! Quarter record model

use serde::{Deserialize, Serialize};

/// Performance target shared by every quarter, also the scenario ceiling.
pub const TARGET_SCORE: f64 = 90.0;

/// One row of the quarterly table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterRecord {
    /// Quarter label, e.g. "Q1 2024"
    pub quarter: String,
    /// Observed performance score
    pub performance: f64,
    /// Target score (always [`TARGET_SCORE`] when built with [`QuarterRecord::new`])
    pub target: f64,
    /// Industry benchmark for the same quarter
    pub benchmark: f64,
}

impl QuarterRecord {
    /// Create a record with the standard target.
    pub fn new(quarter: &str, performance: f64, benchmark: f64) -> Self {
        Self {
            quarter: quarter.to_string(),
            performance,
            target: TARGET_SCORE,
            benchmark,
        }
    }

    /// Distance still to cover before reaching the target.
    pub fn gap_to_target(&self) -> f64 {
        self.target - self.performance
    }

    /// Distance between the benchmark and our performance.
    pub fn gap_to_benchmark(&self) -> f64 {
        self.benchmark - self.performance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_standard_target() {
        let record = QuarterRecord::new("Q1 2024", 70.5, 78.0);
        assert_eq!(record.quarter, "Q1 2024");
        assert_eq!(record.target, TARGET_SCORE);
    }

    #[test]
    fn test_record_gaps() {
        let record = QuarterRecord::new("Q2 2024", 72.8, 79.5);
        assert!((record.gap_to_target() - 17.2).abs() < 1e-9);
        assert!((record.gap_to_benchmark() - 6.7).abs() < 1e-9);
    }
}
