//! Descriptive statistics over quarterly performance
//!
//! Every statistic needs at least two quarters: a standard deviation and a
//! slope are undefined for a single point, and the summary is all-or-nothing.

use crate::trend::LinearTrend;
use quarterly_spi::{
    Dataset, InvalidInputError, QuarterGap, Result, StatsSummary, TARGET_SCORE,
};
use tracing::debug;

/// Minimum number of quarters accepted by [`compute_statistics`].
pub const MIN_QUARTERS: usize = 2;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64> {
    require_len(values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; the average of the two middle values for an even count.
pub fn median(values: &[f64]) -> Result<f64> {
    require_len(values, 1)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std_dev(values: &[f64]) -> Result<f64> {
    require_len(values, 2)?;
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Ok(variance.sqrt())
}

/// Compute the full summary for a dataset.
pub fn compute_statistics(dataset: &Dataset) -> Result<StatsSummary> {
    let performance = dataset.performance();
    let benchmark = dataset.benchmark();

    require_len(&performance, MIN_QUARTERS)?;
    ensure_all_finite("performance", &performance)?;
    ensure_all_finite("benchmark", &benchmark)?;

    let mean_performance = mean(&performance)?;
    let summary = StatsSummary {
        mean: mean_performance,
        median: median(&performance)?,
        std: sample_std_dev(&performance)?,
        trend_slope: LinearTrend::fit(&performance)?.slope(),
        gap_to_target: TARGET_SCORE - mean_performance,
        gap_to_benchmark: mean(&benchmark)? - mean_performance,
    };

    debug!(
        quarters = dataset.len(),
        mean = summary.mean,
        slope = summary.trend_slope,
        "computed statistics"
    );
    Ok(summary)
}

/// Gap to target and to benchmark for every quarter.
pub fn quarter_gaps(dataset: &Dataset) -> Vec<QuarterGap> {
    dataset
        .records()
        .iter()
        .map(|r| QuarterGap {
            quarter: r.quarter.clone(),
            to_target: r.gap_to_target(),
            to_benchmark: r.gap_to_benchmark(),
        })
        .collect()
}

fn require_len(values: &[f64], required: usize) -> Result<()> {
    if values.len() < required {
        return Err(InvalidInputError::InsufficientData {
            required,
            actual: values.len(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_all_finite(name: &str, values: &[f64]) -> Result<()> {
    values
        .iter()
        .try_for_each(|&v| InvalidInputError::ensure_finite(name, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_dataset;
    use quarterly_spi::QuarterRecord;

    fn dataset_of(performance: &[f64]) -> Dataset {
        performance
            .iter()
            .enumerate()
            .map(|(i, &p)| QuarterRecord::new(&format!("Q{}", i + 1), p, 80.0))
            .collect()
    }

    #[test]
    fn test_fixed_dataset_summary() {
        let stats = compute_statistics(&load_dataset()).unwrap();

        assert!((stats.mean - 73.35).abs() < 0.01);
        assert!((stats.median - 73.85).abs() < 0.01);
        assert!((stats.std - 4.75f64.sqrt()).abs() < 1e-9);
        assert!((stats.trend_slope - 1.56).abs() < 1e-9);
        assert!((stats.gap_to_target - 16.65).abs() < 1e-9);
        assert!((stats.gap_to_benchmark - 6.275).abs() < 1e-9);
    }

    #[test]
    fn test_gap_to_target_identity() {
        for data in [vec![10.0, 20.0], vec![95.0, 99.0, 101.5], vec![-3.0, 0.0, 3.0, 9.0]] {
            let stats = compute_statistics(&dataset_of(&data)).unwrap();
            assert_eq!(stats.gap_to_target, 90.0 - stats.mean);
        }
    }

    #[test]
    fn test_slope_sign_for_two_points() {
        let up = compute_statistics(&dataset_of(&[60.0, 65.0])).unwrap();
        let down = compute_statistics(&dataset_of(&[65.0, 60.0])).unwrap();
        let flat = compute_statistics(&dataset_of(&[60.0, 60.0])).unwrap();

        assert!(up.trend_slope > 0.0);
        assert!(down.trend_slope < 0.0);
        assert_eq!(flat.trend_slope, 0.0);
    }

    #[test]
    fn test_constant_values_have_zero_std() {
        let stats = compute_statistics(&dataset_of(&[75.0; 5])).unwrap();
        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.median, 75.0);
    }

    #[test]
    fn test_rejects_undersized_datasets() {
        assert_eq!(
            compute_statistics(&Dataset::default()),
            Err(InvalidInputError::InsufficientData {
                required: 2,
                actual: 0
            })
        );
        assert!(matches!(
            compute_statistics(&dataset_of(&[70.0])),
            Err(InvalidInputError::InsufficientData { actual: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let result = compute_statistics(&dataset_of(&[70.0, f64::NAN, 72.0]));
        assert!(matches!(result, Err(InvalidInputError::NonFiniteValue { .. })));

        let dataset = Dataset::new(vec![
            QuarterRecord::new("Q1 2024", 70.0, 80.0),
            QuarterRecord::new("Q2 2024", 72.0, f64::INFINITY),
        ]);
        assert_eq!(
            compute_statistics(&dataset),
            Err(InvalidInputError::NonFiniteValue {
                name: "benchmark".to_string(),
                value: f64::INFINITY,
            })
        );
    }

    #[test]
    fn test_median_odd_and_unsorted() {
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
        assert!(median(&[]).is_err());
    }

    #[test]
    fn test_mean_and_std_helpers() {
        assert_eq!(mean(&[42.0]).unwrap(), 42.0);
        assert!(sample_std_dev(&[42.0]).is_err());
        assert!((sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap()
            - (32.0f64 / 7.0).sqrt())
        .abs()
            < 1e-12);
    }

    #[test]
    fn test_quarter_gaps() {
        let gaps = quarter_gaps(&load_dataset());
        assert_eq!(gaps.len(), 4);
        assert_eq!(gaps[0].quarter, "Q1 2024");
        assert!((gaps[0].to_target - 19.5).abs() < 1e-9);
        assert!((gaps[0].to_benchmark - 7.5).abs() < 1e-9);
        assert!((gaps[3].to_benchmark - 6.1).abs() < 1e-9);
    }
}
