//! Trait for trend projection

use crate::error::Result;
use crate::model::Dataset;

/// Extrapolates historical performance into future quarters.
pub trait TrendProjector: Send + Sync {
    /// Project `periods` values following the last observed quarter.
    fn project(&self, dataset: &Dataset, periods: usize) -> Result<Vec<f64>>;
}
