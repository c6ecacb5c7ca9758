//! Model module containing data structures

mod dataset;
mod quarter_gap;
mod quarter_record;
mod scenario;
mod stats_summary;

pub use dataset::Dataset;
pub use quarter_gap::QuarterGap;
pub use quarter_record::{QuarterRecord, TARGET_SCORE};
pub use scenario::{
    ImprovementScenarios, ImprovementTarget, Scenario, ScenarioProjections, IMPROVEMENT_SCENARIOS,
};
pub use stats_summary::StatsSummary;
