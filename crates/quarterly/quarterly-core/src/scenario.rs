//! Improvement scenario modelling
//!
//! Each scenario raises the latest observed value by its multiplier, then by
//! its slack factor, and caps the result at the ceiling. The path from the
//! current value to that end point is interpolated linearly.

use quarterly_spi::{
    ImprovementScenarios, ImprovementTarget, InvalidInputError, Result, Scenario,
    ScenarioModeler, ScenarioProjections, IMPROVEMENT_SCENARIOS, TARGET_SCORE,
};
use tracing::debug;

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last value is exactly `end`. Requires `count >= 2`.
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(InvalidInputError::parameter(
            "periods",
            format!("interpolation needs at least 2 points, got {}", count),
        ));
    }

    let last = count - 1;
    let step = (end - start) / last as f64;
    Ok((0..count)
        .map(|i| if i == last { end } else { start + step * i as f64 })
        .collect())
}

/// [`ScenarioModeler`] with configurable multipliers and ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CappedScenarioModeler {
    scenarios: ImprovementScenarios,
    ceiling: f64,
}

impl Default for CappedScenarioModeler {
    fn default() -> Self {
        Self::new()
    }
}

impl CappedScenarioModeler {
    /// Default multipliers, capped at the target score.
    pub fn new() -> Self {
        Self {
            scenarios: IMPROVEMENT_SCENARIOS,
            ceiling: TARGET_SCORE,
        }
    }

    /// Use a different ceiling.
    pub fn with_ceiling(mut self, ceiling: f64) -> Result<Self> {
        InvalidInputError::ensure_finite("ceiling", ceiling)?;
        if ceiling <= 0.0 {
            return Err(InvalidInputError::parameter("ceiling", "must be positive"));
        }
        self.ceiling = ceiling;
        Ok(self)
    }

    /// Use different multipliers.
    pub fn with_scenarios(mut self, scenarios: ImprovementScenarios) -> Result<Self> {
        for scenario in Scenario::ALL {
            let m = scenarios.multiplier(scenario);
            InvalidInputError::ensure_finite("multiplier", m)?;
            if m < 0.0 {
                return Err(InvalidInputError::parameter(
                    "multiplier",
                    format!("{} improvement must not be negative", scenario),
                ));
            }
        }
        self.scenarios = scenarios;
        Ok(self)
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn scenarios(&self) -> &ImprovementScenarios {
        &self.scenarios
    }

    /// Capped end point for one scenario.
    pub fn end_point(&self, current_value: f64, scenario: Scenario) -> f64 {
        let raw = current_value
            * (1.0 + self.scenarios.multiplier(scenario))
            * scenario.slack_factor();
        raw.min(self.ceiling)
    }

    fn validate(&self, current_value: f64) -> Result<()> {
        InvalidInputError::ensure_finite("current_value", current_value)?;
        if current_value < 0.0 {
            return Err(InvalidInputError::parameter(
                "current_value",
                "must not be negative",
            ));
        }
        if current_value > self.ceiling {
            return Err(InvalidInputError::parameter(
                "current_value",
                format!("{} is above the ceiling {}", current_value, self.ceiling),
            ));
        }
        Ok(())
    }
}

impl ScenarioModeler for CappedScenarioModeler {
    fn model(&self, current_value: f64, periods: usize) -> Result<ScenarioProjections> {
        self.validate(current_value)?;

        let path = |scenario: Scenario| {
            linspace(current_value, self.end_point(current_value, scenario), periods)
        };
        let projections = ScenarioProjections {
            conservative: path(Scenario::Conservative)?,
            expected: path(Scenario::Expected)?,
            optimistic: path(Scenario::Optimistic)?,
        };

        debug!(
            current_value,
            periods,
            ceiling = self.ceiling,
            "modelled improvement scenarios"
        );
        Ok(projections)
    }
}

/// Model the three default scenarios from the latest observed value.
pub fn model_scenarios(current_value: f64, periods: usize) -> Result<ScenarioProjections> {
    CappedScenarioModeler::new().model(current_value, periods)
}

/// Uncapped `baseline * (1 + multiplier)` for every scenario.
pub fn improvement_targets(baseline: f64) -> Vec<ImprovementTarget> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| ImprovementTarget {
            scenario,
            baseline,
            improved: baseline * (1.0 + IMPROVEMENT_SCENARIOS.multiplier(scenario)),
        })
        .collect()
}
