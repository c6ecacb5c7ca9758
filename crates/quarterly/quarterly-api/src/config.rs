//! Analysis configuration types.

use quarterly_spi::{InvalidInputError, Result, TARGET_SCORE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of future quarters to project
    pub periods: usize,
    /// Upper bound for scenario values
    pub ceiling: f64,
    /// Directory chart files are written to
    pub output_dir: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            periods: 4,
            ceiling: TARGET_SCORE,
            output_dir: PathBuf::from("."),
        }
    }
}

impl AnalysisConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }
}

/// Builder for AnalysisConfig.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    periods: Option<usize>,
    ceiling: Option<f64>,
    output_dir: Option<PathBuf>,
}

impl AnalysisConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of projected quarters.
    pub fn periods(mut self, periods: usize) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Set the scenario ceiling.
    pub fn ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Set the chart output directory.
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Build the configuration.
    ///
    /// Scenario paths need a start and an end point, so `periods` must be at
    /// least 2; the ceiling must be finite and positive.
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();
        let periods = self.periods.unwrap_or(defaults.periods);
        let ceiling = self.ceiling.unwrap_or(defaults.ceiling);

        if periods < 2 {
            return Err(InvalidInputError::parameter(
                "periods",
                format!("must be at least 2, got {}", periods),
            ));
        }
        InvalidInputError::ensure_finite("ceiling", ceiling)?;
        if ceiling <= 0.0 {
            return Err(InvalidInputError::parameter("ceiling", "must be positive"));
        }

        Ok(AnalysisConfig {
            periods,
            ceiling,
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.periods, 4);
        assert_eq!(config.ceiling, 90.0);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::builder()
            .periods(8)
            .ceiling(95.0)
            .output_dir("charts")
            .build()
            .unwrap();
        assert_eq!(config.periods, 8);
        assert_eq!(config.ceiling, 95.0);
        assert_eq!(config.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(
            AnalysisConfigBuilder::new().build().unwrap(),
            AnalysisConfig::default()
        );
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(AnalysisConfig::builder().periods(1).build().is_err());
        assert!(AnalysisConfig::builder().ceiling(0.0).build().is_err());
        assert!(AnalysisConfig::builder().ceiling(f64::NAN).build().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
