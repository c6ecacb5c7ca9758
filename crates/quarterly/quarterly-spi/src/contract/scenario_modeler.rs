//! Trait for scenario modelling

use crate::error::Result;
use crate::model::ScenarioProjections;

/// Builds improvement paths starting from the latest observed value.
pub trait ScenarioModeler: Send + Sync {
    /// Interpolate `periods` points per scenario, starting at `current_value`.
    fn model(&self, current_value: f64, periods: usize) -> Result<ScenarioProjections>;
}
