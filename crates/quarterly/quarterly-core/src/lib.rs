//! Quarterly Analysis Core
//!
//! Implementations of the analysis stages: the built-in dataset, descriptive
//! statistics, least-squares trend projection, capped improvement scenarios
//! and the console report that ties them together.

pub mod dataset;
pub mod report;
pub mod scenario;
pub mod statistics;
pub mod trend;

// Re-export SPI items for implementations
pub use quarterly_spi::{
    Dataset, DatasetProvider, ImprovementScenarios, ImprovementTarget, InvalidInputError,
    QuarterGap, QuarterRecord, Result, Scenario, ScenarioModeler, ScenarioProjections,
    StatsSummary, TrendProjector, IMPROVEMENT_SCENARIOS, TARGET_SCORE,
};

// Re-export main types and operations
pub use dataset::{future_quarter_labels, load_dataset, FixedQuarterlyDataset};
pub use report::AnalysisReport;
pub use scenario::{improvement_targets, linspace, model_scenarios, CappedScenarioModeler};
pub use statistics::{compute_statistics, mean, median, quarter_gaps, sample_std_dev};
pub use trend::{project_trend, LinearTrend, LinearTrendProjector};
