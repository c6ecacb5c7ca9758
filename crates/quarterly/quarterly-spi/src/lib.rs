//! Quarterly Analysis Service Provider Interface
//!
//! Defines the data model, trait contracts and error type shared by the
//! statistics, trend projection and scenario modelling stages.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{DatasetProvider, ScenarioModeler, TrendProjector};
pub use error::{InvalidInputError, Result};
pub use model::{
    Dataset, ImprovementScenarios, ImprovementTarget, QuarterGap, QuarterRecord, Scenario,
    ScenarioProjections, StatsSummary, IMPROVEMENT_SCENARIOS, TARGET_SCORE,
};
