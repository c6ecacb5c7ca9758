//! Benchmarks for the analysis pipeline
//!
//! Run with: cargo bench -p quarterly-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quarterly_core::{
    compute_statistics, load_dataset, model_scenarios, project_trend, AnalysisReport,
    Dataset, QuarterRecord, TARGET_SCORE,
};

fn long_dataset(n: usize) -> Dataset {
    (0..n)
        .map(|i| {
            let p = 60.0 + 0.05 * i as f64 + (i as f64 * 0.7).sin() * 2.0;
            QuarterRecord::new(&format!("Q{} {}", i % 4 + 1, 2000 + i / 4), p, p + 5.0)
        })
        .collect()
}

fn bench_statistics(c: &mut Criterion) {
    let fixed = load_dataset();
    let long = long_dataset(400);

    c.bench_function("statistics_fixed", |b| {
        b.iter(|| compute_statistics(black_box(&fixed)))
    });
    c.bench_function("statistics_400", |b| {
        b.iter(|| compute_statistics(black_box(&long)))
    });
}

fn bench_projection(c: &mut Criterion) {
    let long = long_dataset(400);

    c.bench_function("project_trend_400x20", |b| {
        b.iter(|| project_trend(black_box(&long), 20))
    });
    c.bench_function("model_scenarios_20", |b| {
        b.iter(|| model_scenarios(black_box(74.9), 20))
    });
}

fn bench_report(c: &mut Criterion) {
    let fixed = load_dataset();

    c.bench_function("report_fixed", |b| {
        b.iter(|| AnalysisReport::build(black_box(&fixed), 4, TARGET_SCORE))
    });
}

criterion_group!(benches, bench_statistics, bench_projection, bench_report);
criterion_main!(benches);
