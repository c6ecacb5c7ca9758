//! Trait for dataset sources

use crate::model::Dataset;

/// Supplies the quarterly table to analyse.
pub trait DatasetProvider: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Return the dataset in chronological order.
    fn load(&self) -> Dataset;
}
