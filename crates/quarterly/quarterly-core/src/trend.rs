//! Linear trend fitting and projection
//!
//! Fits y = intercept + slope * t by ordinary least squares, where t is the
//! quarter index (0 for the oldest quarter), and extrapolates the line past
//! the last observed quarter. Projections are never clamped.

use crate::statistics::ensure_all_finite;
use quarterly_spi::{Dataset, InvalidInputError, Result, TrendProjector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Least-squares line over (quarter index, value) pairs.
///
/// # Example
///
/// ```rust
/// use quarterly_core::LinearTrend;
///
/// let trend = LinearTrend::fit(&[10.0, 12.0, 14.0, 16.0]).unwrap();
/// assert!((trend.slope() - 2.0).abs() < 1e-10);
/// assert_eq!(trend.project(2), vec![18.0, 20.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Slope (change per quarter)
    slope: f64,
    /// Value at index 0
    intercept: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// Coefficient of determination
    r_squared: f64,
}

impl LinearTrend {
    /// Fit the line to a series ordered oldest first.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(InvalidInputError::InsufficientData {
                required: 2,
                actual: values.len(),
            });
        }
        ensure_all_finite("values", values)?;

        let n = values.len() as f64;
        let mean_t = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        // slope = cov(t, y) / var(t)
        let (cov, var) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(cov, var), (i, &y)| {
                let dt = i as f64 - mean_t;
                (cov + dt * (y - mean_y), var + dt * dt)
            });

        let slope = cov / var;
        let intercept = mean_y - slope * mean_t;

        let ss_tot: f64 = values.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = values
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
            .sum();
        let r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        Ok(Self {
            slope,
            intercept,
            n_observations: values.len(),
            r_squared,
        })
    }

    /// Slope (trend per quarter).
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Value of the line at index 0.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// R-squared of the fit.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Number of observations the line was fitted on.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Evaluate the line at an arbitrary index.
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// The line evaluated at every observed index.
    pub fn fitted(&self) -> Vec<f64> {
        (0..self.n_observations)
            .map(|i| self.value_at(i as f64))
            .collect()
    }

    /// The line evaluated at the `periods` indices after the last observation.
    pub fn project(&self, periods: usize) -> Vec<f64> {
        (self.n_observations..self.n_observations + periods)
            .map(|i| self.value_at(i as f64))
            .collect()
    }
}

/// [`TrendProjector`] backed by [`LinearTrend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTrendProjector;

impl LinearTrendProjector {
    pub fn new() -> Self {
        Self
    }
}

impl TrendProjector for LinearTrendProjector {
    fn project(&self, dataset: &Dataset, periods: usize) -> Result<Vec<f64>> {
        if periods == 0 {
            return Err(InvalidInputError::parameter("periods", "must be positive"));
        }

        let trend = LinearTrend::fit(&dataset.performance())?;
        let projection = trend.project(periods);

        debug!(
            periods,
            slope = trend.slope(),
            intercept = trend.intercept(),
            "projected linear trend"
        );
        Ok(projection)
    }
}

/// Project the performance trend `periods` quarters ahead.
pub fn project_trend(dataset: &Dataset, periods: usize) -> Result<Vec<f64>> {
    LinearTrendProjector.project(dataset, periods)
}
