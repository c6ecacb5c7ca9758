//! Analysis report
//!
//! Collects every derived number the console output and the charts need,
//! computed once from a dataset.

use crate::dataset::future_quarter_labels;
use crate::scenario::{improvement_targets, CappedScenarioModeler};
use crate::statistics::{compute_statistics, quarter_gaps};
use crate::trend::LinearTrend;
use quarterly_spi::{
    Dataset, ImprovementTarget, InvalidInputError, QuarterGap, Result, ScenarioModeler,
    ScenarioProjections, StatsSummary, IMPROVEMENT_SCENARIOS, TARGET_SCORE,
};
use serde::Serialize;
use std::fmt;

const RULE_WIDTH: usize = 70;

/// Everything derived from one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub dataset: Dataset,
    pub statistics: StatsSummary,
    pub trend: LinearTrend,
    pub gaps: Vec<QuarterGap>,
    /// Trend line evaluated at the future quarters
    pub projection: Vec<f64>,
    /// Labels of the future quarters
    pub projection_labels: Vec<String>,
    /// Scenario paths starting at the latest observed value
    pub scenarios: ScenarioProjections,
    /// Uncapped improvements relative to the mean
    pub improvement_targets: Vec<ImprovementTarget>,
    /// Score the gaps are measured against
    pub target: f64,
    /// Upper bound for scenario values
    pub ceiling: f64,
}

impl AnalysisReport {
    /// Run statistics, projection and scenario modelling for `periods`
    /// future quarters with scenario values capped at `ceiling`.
    pub fn build(dataset: &Dataset, periods: usize, ceiling: f64) -> Result<Self> {
        let statistics = compute_statistics(dataset)?;
        let trend = LinearTrend::fit(&dataset.performance())?;

        let latest = dataset.latest().ok_or(InvalidInputError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        let scenarios = CappedScenarioModeler::new()
            .with_ceiling(ceiling)?
            .model(latest.performance, periods)?;

        Ok(Self {
            dataset: dataset.clone(),
            statistics,
            trend,
            gaps: quarter_gaps(dataset),
            projection: trend.project(periods),
            projection_labels: future_quarter_labels(&latest.quarter, periods),
            scenarios,
            improvement_targets: improvement_targets(statistics.mean),
            target: TARGET_SCORE,
            ceiling,
        })
    }

    /// Historical labels followed by the projected ones.
    pub fn all_labels(&self) -> Vec<String> {
        self.dataset
            .labels()
            .into_iter()
            .map(str::to_string)
            .chain(self.projection_labels.iter().cloned())
            .collect()
    }

    /// Whether the mean is still below the target score.
    pub fn below_target(&self) -> bool {
        self.statistics.mean < self.target
    }

    /// Whether scenarios are capped somewhere other than the target.
    pub fn has_custom_ceiling(&self) -> bool {
        self.ceiling != self.target
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let stats = &self.statistics;

        writeln!(f, "{}", rule)?;
        writeln!(f, "QUARTERLY PERFORMANCE DATA ANALYSIS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<10} {:>12} {:>8} {:>20}",
            "Quarter", "Performance", "Target", "Industry_Benchmark"
        )?;
        for r in self.dataset.records() {
            writeln!(
                f,
                "{:<10} {:>12.1} {:>8.0} {:>20.1}",
                r.quarter, r.performance, r.target, r.benchmark
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Statistics")?;
        writeln!(f, "  - Average Performance: {:.2}", stats.mean)?;
        writeln!(f, "  - Median Performance: {:.2}", stats.median)?;
        writeln!(f, "  - Standard Deviation: {:.2}", stats.std)?;
        writeln!(f, "  - Trend Slope: {:.3} (per quarter)", stats.trend_slope)?;
        writeln!(f, "  - Gap to Target ({}): {:.2}", self.target, stats.gap_to_target)?;
        writeln!(f, "  - Gap to Benchmark: {:.2}", stats.gap_to_benchmark)?;
        writeln!(f)?;

        writeln!(f, "Projected Trend (no intervention)")?;
        for (label, value) in self.projection_labels.iter().zip(&self.projection) {
            writeln!(f, "  - {}: {:.2}", label, value)?;
        }
        writeln!(f)?;

        writeln!(f, "Predictive Maintenance Scenarios (from latest quarter)")?;
        if self.has_custom_ceiling() {
            writeln!(f, "  - Ceiling: {}", self.ceiling)?;
        }
        for (scenario, path) in self.scenarios.iter() {
            if let Some(end) = path.last() {
                writeln!(f, "  - {}: {:.2}", scenario, end)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Predictive Maintenance Impact")?;
        writeln!(f, "  - Current Average: {:.2}", stats.mean)?;
        for target in &self.improvement_targets {
            let pct = IMPROVEMENT_SCENARIOS.multiplier(target.scenario) * 100.0;
            writeln!(
                f,
                "  - {} Improvement (+{}%): {:.2}",
                target.scenario,
                format_percent(pct),
                target.improved
            )?;
        }
        writeln!(f)?;

        writeln!(f, "{}", rule)?;
        if self.below_target() {
            writeln!(
                f,
                "Key Finding: Current average of {:.2} is below target of {}.",
                stats.mean, self.target
            )?;
            writeln!(
                f,
                "Recommendation: Implement predictive maintenance program to bridge the gap."
            )?;
        } else {
            writeln!(
                f,
                "Key Finding: Current average of {:.2} meets the target of {}.",
                stats.mean, self.target
            )?;
        }
        Ok(())
    }
}

/// "15", "17.5", "20" rather than "15.0", "17.5", "20.0".
fn format_percent(pct: f64) -> String {
    let rounded = (pct * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}
