//! Statistics summary model

use serde::{Deserialize, Serialize};

/// Descriptive and trend statistics computed once from a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Arithmetic mean of performance
    pub mean: f64,
    /// Median of performance
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std: f64,
    /// Least-squares slope per quarter
    pub trend_slope: f64,
    /// Target minus mean performance
    pub gap_to_target: f64,
    /// Mean benchmark minus mean performance
    pub gap_to_benchmark: f64,
}
