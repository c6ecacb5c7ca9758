//! Per-quarter gap model

use serde::{Deserialize, Serialize};

/// Gaps for a single quarter, used by the gap analysis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterGap {
    /// Quarter label
    pub quarter: String,
    /// target - performance
    pub to_target: f64,
    /// benchmark - performance
    pub to_benchmark: f64,
}
