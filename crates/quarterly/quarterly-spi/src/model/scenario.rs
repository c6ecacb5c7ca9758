//! Improvement scenario models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional improvement per scenario tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementScenarios {
    pub conservative: f64,
    pub expected: f64,
    pub optimistic: f64,
}

/// Improvement range reported for predictive maintenance programs (15-20%).
pub const IMPROVEMENT_SCENARIOS: ImprovementScenarios = ImprovementScenarios {
    conservative: 0.15,
    expected: 0.175,
    optimistic: 0.20,
};

impl ImprovementScenarios {
    /// Multiplier for the given tier.
    pub fn multiplier(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Conservative => self.conservative,
            Scenario::Expected => self.expected,
            Scenario::Optimistic => self.optimistic,
        }
    }
}

impl Default for ImprovementScenarios {
    fn default() -> Self {
        IMPROVEMENT_SCENARIOS
    }
}

/// Scenario tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Conservative,
    Expected,
    Optimistic,
}

impl Scenario {
    /// All tiers, least to most optimistic.
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Expected,
        Scenario::Optimistic,
    ];

    /// Amplification applied to the raw improvement before capping.
    pub fn slack_factor(&self) -> f64 {
        match self {
            Scenario::Conservative => 1.15,
            Scenario::Expected => 1.20,
            Scenario::Optimistic => 1.25,
        }
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Conservative => "Conservative",
            Scenario::Expected => "Expected",
            Scenario::Optimistic => "Optimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Interpolated path per scenario tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjections {
    pub conservative: Vec<f64>,
    pub expected: Vec<f64>,
    pub optimistic: Vec<f64>,
}

impl ScenarioProjections {
    /// Path for the given tier.
    pub fn get(&self, scenario: Scenario) -> &[f64] {
        match scenario {
            Scenario::Conservative => &self.conservative,
            Scenario::Expected => &self.expected,
            Scenario::Optimistic => &self.optimistic,
        }
    }

    /// Iterate tiers with their paths.
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &[f64])> + '_ {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Uncapped improved value for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementTarget {
    pub scenario: Scenario,
    /// Value the improvement is applied to
    pub baseline: f64,
    /// baseline * (1 + multiplier)
    pub improved: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers() {
        let s = ImprovementScenarios::default();
        assert_eq!(s.multiplier(Scenario::Conservative), 0.15);
        assert_eq!(s.multiplier(Scenario::Expected), 0.175);
        assert_eq!(s.multiplier(Scenario::Optimistic), 0.20);
    }

    #[test]
    fn test_slack_factors_increase_with_optimism() {
        let factors: Vec<f64> = Scenario::ALL.iter().map(|s| s.slack_factor()).collect();
        assert_eq!(factors, vec![1.15, 1.20, 1.25]);
    }

    #[test]
    fn test_projections_lookup() {
        let p = ScenarioProjections {
            conservative: vec![1.0],
            expected: vec![2.0],
            optimistic: vec![3.0],
        };
        let collected: Vec<(Scenario, f64)> = p.iter().map(|(s, v)| (s, v[0])).collect();
        assert_eq!(
            collected,
            vec![
                (Scenario::Conservative, 1.0),
                (Scenario::Expected, 2.0),
                (Scenario::Optimistic, 3.0),
            ]
        );
    }

    #[test]
    fn test_scenario_display() {
        assert_eq!(Scenario::Expected.to_string(), "Expected");
    }
}
