//! Quarterly Analysis Consumer API
//!
//! Configuration types and entry points for running the analysis.
//!
//! This crate provides:
//! - [`AnalysisConfig`] and its builder
//! - [`analyze`] / [`analyze_with`] to run the whole pipeline
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::{AnalysisConfig, AnalysisConfigBuilder};

// Re-export from core
pub use quarterly_core::{
    compute_statistics, dataset, future_quarter_labels, improvement_targets, linspace,
    load_dataset, model_scenarios, project_trend, quarter_gaps, report, scenario, statistics,
    trend, AnalysisReport, CappedScenarioModeler, FixedQuarterlyDataset, LinearTrend,
    LinearTrendProjector,
};

// Re-export from SPI
pub use quarterly_spi::{
    Dataset, DatasetProvider, ImprovementScenarios, ImprovementTarget, InvalidInputError,
    QuarterGap, QuarterRecord, Result, Scenario, ScenarioModeler, ScenarioProjections,
    StatsSummary, TrendProjector, IMPROVEMENT_SCENARIOS, TARGET_SCORE,
};

use tracing::info;

/// Run the analysis on the built-in dataset.
pub fn analyze(config: &AnalysisConfig) -> Result<AnalysisReport> {
    analyze_with(config, &FixedQuarterlyDataset)
}

/// Run the analysis on the dataset supplied by `provider`.
pub fn analyze_with(
    config: &AnalysisConfig,
    provider: &dyn DatasetProvider,
) -> Result<AnalysisReport> {
    let dataset = provider.load();
    info!(
        provider = provider.name(),
        quarters = dataset.len(),
        periods = config.periods,
        "running quarterly analysis"
    );
    AnalysisReport::build(&dataset, config.periods, config.ceiling)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{analyze, analyze_with, AnalysisConfig, AnalysisConfigBuilder};
    pub use quarterly_core::{
        compute_statistics, load_dataset, model_scenarios, project_trend, AnalysisReport,
        LinearTrend,
    };
    pub use quarterly_spi::{
        Dataset, DatasetProvider, InvalidInputError, QuarterRecord, Result, Scenario,
        ScenarioProjections, StatsSummary,
    };
}
