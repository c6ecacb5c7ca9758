//! End-to-end tests for the quarterly analysis stack
//!
//! Runs the whole pipeline the way the command line tool does.

use quarterly_facade::prelude::*;

#[test]
fn e2e_full_report() {
    let config = AnalysisConfig::builder().periods(4).build().unwrap();
    let report = analyze(&config).unwrap();
    let text = report.to_string();

    assert!(text.starts_with(&"=".repeat(70)));
    assert!(text.contains("Q1 2024"));
    assert!(text.contains("Average Performance: 73.35"));
    assert!(text.contains("Gap to Benchmark:"));
    assert!(text.contains("Recommendation: Implement predictive maintenance program"));
}

#[test]
fn e2e_projection_and_scenarios_share_horizon() {
    let report = analyze(&AnalysisConfig::builder().periods(6).build().unwrap()).unwrap();

    assert_eq!(report.projection.len(), 6);
    assert_eq!(report.projection_labels.len(), 6);
    for (_, path) in report.scenarios.iter() {
        assert_eq!(path.len(), 6);
        assert!(path.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn e2e_manual_pipeline_matches_report() {
    let dataset = load_dataset();
    let stats = compute_statistics(&dataset).unwrap();
    let projection = project_trend(&dataset, 4).unwrap();
    let scenarios = model_scenarios(dataset.latest().unwrap().performance, 4).unwrap();

    let report = analyze(&AnalysisConfig::default()).unwrap();
    assert_eq!(report.statistics, stats);
    assert_eq!(report.projection, projection);
    assert_eq!(report.scenarios, scenarios);
}

#[test]
fn e2e_invalid_config_is_rejected_before_running() {
    let result = AnalysisConfig::builder().periods(1).build();
    assert!(matches!(result, Err(InvalidInputError::InvalidParameter { .. })));
}
