//! Chart rendering for the analysis report.
//!
//! Charts are written as SVG so no system font stack is needed.

use crate::error::{CliError, CliResult};
use plotters::prelude::*;
use quarterly_facade::{AnalysisReport, Scenario};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TREND_CHART: &str = "trend_analysis.svg";
pub const BENCHMARK_CHART: &str = "benchmark_comparison.svg";
pub const PROJECTION_CHART: &str = "projection_with_maintenance.svg";

const PERFORMANCE_COLOR: RGBColor = RGBColor(0x2E, 0x86, 0xAB);
const TARGET_COLOR: RGBColor = RGBColor(0xA2, 0x3B, 0x72);
const BENCHMARK_COLOR: RGBColor = RGBColor(0xF1, 0x8F, 0x01);
const TREND_COLOR: RGBColor = RGBColor(0xC7, 0x3E, 0x1D);
const AVERAGE_COLOR: RGBColor = RGBColor(0x2C, 0xA0, 0x2C);
const DIVIDER_COLOR: RGBColor = RGBColor(0x80, 0x80, 0x80);
const CEILING_COLOR: RGBColor = RGBColor(0x5C, 0x5C, 0x8A);

const FONT: &str = "sans-serif";

type DrawResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;
type DrawFn = fn(&AnalysisReport, &Path) -> DrawResult<()>;

/// Render all three charts into `output_dir`, returning the written paths.
pub fn render_all(report: &AnalysisReport, output_dir: &Path) -> CliResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|source| CliError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let charts: [(&str, DrawFn); 3] = [
        (TREND_CHART, draw_trend),
        (BENCHMARK_CHART, draw_benchmark),
        (PROJECTION_CHART, draw_projection),
    ];

    charts
        .iter()
        .map(|(name, draw)| -> CliResult<PathBuf> {
            let path = output_dir.join(name);
            draw(report, &path).map_err(|e| CliError::Chart {
                path: path.clone(),
                message: e.to_string(),
            })?;
            info!(path = %path.display(), "chart saved");
            Ok(path)
        })
        .collect()
}

/// Performance, target, benchmark, fitted trend and average.
fn draw_trend(report: &AnalysisReport, path: &Path) -> DrawResult<()> {
    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = owned_labels(&report.dataset.labels());
    let n = labels.len();
    let x_end = n as f64 - 0.5;
    let tick = |x: &f64| tick_label(&labels, *x);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Quarterly Performance Analysis: Trend vs Target vs Benchmark",
            (FONT, 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_end, 65f64..95f64)?;

    chart
        .configure_mesh()
        .x_labels(n * 2)
        .x_label_formatter(&tick)
        .x_desc("Quarter")
        .y_desc("Performance Score")
        .draw()?;

    let performance = indexed(&report.dataset.performance(), 0);
    chart
        .draw_series(LineSeries::new(
            performance.clone(),
            PERFORMANCE_COLOR.stroke_width(2),
        ))?
        .label("Actual Performance")
        .legend(legend_line(PERFORMANCE_COLOR));
    chart.draw_series(
        performance
            .iter()
            .map(|&p| Circle::new(p, 6, PERFORMANCE_COLOR.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            indexed(&report.dataset.targets(), 0),
            8,
            6,
            TARGET_COLOR.stroke_width(2),
        ))?
        .label(format!("Target ({})", report.target))
        .legend(legend_line(TARGET_COLOR));

    let benchmark = indexed(&report.dataset.benchmark(), 0);
    chart
        .draw_series(LineSeries::new(
            benchmark.clone(),
            BENCHMARK_COLOR.stroke_width(2),
        ))?
        .label("Industry Benchmark")
        .legend(legend_line(BENCHMARK_COLOR));
    chart.draw_series(benchmark.iter().map(|&(x, y)| {
        Rectangle::new([(x - 0.03, y - 0.4), (x + 0.03, y + 0.4)], BENCHMARK_COLOR.filled())
    }))?;

    chart
        .draw_series(LineSeries::new(
            indexed(&report.trend.fitted(), 0),
            TREND_COLOR.mix(0.7).stroke_width(2),
        ))?
        .label("Trend Line")
        .legend(legend_line(TREND_COLOR));

    let avg = report.statistics.mean;
    chart
        .draw_series(LineSeries::new(
            vec![(-0.5, avg), (x_end, avg)],
            AVERAGE_COLOR.mix(0.5).stroke_width(2),
        ))?
        .label(format!("Average: {:.2}", avg))
        .legend(legend_line(AVERAGE_COLOR));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Grouped bars per quarter next to the gap analysis.
fn draw_benchmark(report: &AnalysisReport, path: &Path) -> DrawResult<()> {
    let root = SVGBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(700);

    let labels = owned_labels(&report.dataset.labels());
    let n = labels.len();
    let x_end = n as f64 - 0.5;
    let tick = |x: &f64| tick_label(&labels, *x);

    // Left: performance vs benchmark vs target
    let mut bars = ChartBuilder::on(&left)
        .caption("Performance Comparison by Quarter", (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..x_end, 0f64..100f64)?;

    bars.configure_mesh()
        .disable_x_mesh()
        .x_labels(n * 2)
        .x_label_formatter(&tick)
        .x_desc("Quarter")
        .y_desc("Performance Score")
        .draw()?;

    let width = 0.25;
    let groups = [
        ("Our Performance", PERFORMANCE_COLOR, report.dataset.performance(), -width),
        ("Industry Benchmark", BENCHMARK_COLOR, report.dataset.benchmark(), 0.0),
        ("Target", TARGET_COLOR, report.dataset.targets(), width),
    ];

    for (name, color, values, offset) in groups {
        bars.draw_series(values.iter().enumerate().map(|(i, &v)| {
            let center = i as f64 + offset;
            Rectangle::new(
                [(center - width / 2.0, 0.0), (center + width / 2.0, v)],
                color.filled(),
            )
        }))?
        .label(name)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));

        bars.draw_series(values.iter().enumerate().map(|(i, &v)| {
            Text::new(
                format!("{:.1}", v),
                (i as f64 + offset - width / 3.0, v + 3.0),
                (FONT, 11).into_font(),
            )
        }))?;
    }

    bars.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    // Right: gap analysis
    let to_target: Vec<f64> = report.gaps.iter().map(|g| g.to_target).collect();
    let to_benchmark: Vec<f64> = report.gaps.iter().map(|g| g.to_benchmark).collect();
    let (y_min, y_max) = padded_range(to_target.iter().chain(&to_benchmark).copied(), 2.0);

    let mut gaps = ChartBuilder::on(&right)
        .caption("Gap Analysis", (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..x_end, y_min.min(0.0)..y_max.max(0.0))?;

    gaps.configure_mesh()
        .x_labels(n * 2)
        .x_label_formatter(&tick)
        .x_desc("Quarter")
        .y_desc("Performance Gap")
        .draw()?;

    for (name, color, values) in [
        ("Gap to Target", TARGET_COLOR, &to_target),
        ("Gap to Benchmark", BENCHMARK_COLOR, &to_benchmark),
    ] {
        let points = indexed(values, 0);
        gaps.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(name)
            .legend(legend_line(color));
        gaps.draw_series(points.iter().map(|&p| Circle::new(p, 5, color.filled())))?;
    }

    gaps.draw_series(LineSeries::new(
        vec![(-0.5, 0.0), (x_end, 0.0)],
        BLACK.stroke_width(1),
    ))?;

    gaps.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// History, trend projection and the three scenario paths.
fn draw_projection(report: &AnalysisReport, path: &Path) -> DrawResult<()> {
    let root = SVGBackend::new(path, (1400, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels = report.all_labels();
    let history = report.dataset.len();
    let x_end = labels.len() as f64 - 0.5;
    let tick = |x: &f64| tick_label(&labels, *x);

    let plotted = report
        .dataset
        .performance()
        .into_iter()
        .chain(report.projection.iter().copied())
        .chain(report.scenarios.iter().flat_map(|(_, p)| p.iter().copied()))
        .chain([report.target, report.ceiling]);
    let (y_min, y_max) = padded_range(plotted, 3.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Performance Projection: Impact of Predictive Maintenance Program",
            (FONT, 24),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..x_end, y_min.min(68.0)..y_max.max(95.0))?;

    chart
        .configure_mesh()
        .x_labels(labels.len() * 2)
        .x_label_formatter(&tick)
        .x_desc("Quarter")
        .y_desc("Performance Score")
        .draw()?;

    // Band between the unchanged trend and the expected scenario
    let trend_points = indexed(&report.projection, history);
    let expected_points = indexed(&report.scenarios.expected, history);
    let band: Vec<(f64, f64)> = trend_points
        .iter()
        .chain(expected_points.iter().rev())
        .copied()
        .collect();
    chart
        .draw_series(std::iter::once(Polygon::new(band, AVERAGE_COLOR.mix(0.2).filled())))?
        .label("Expected Improvement Range")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 5), (x + 15, y + 5)], AVERAGE_COLOR.mix(0.2).filled())
        });

    let historical = indexed(&report.dataset.performance(), 0);
    chart
        .draw_series(LineSeries::new(
            historical.clone(),
            PERFORMANCE_COLOR.stroke_width(3),
        ))?
        .label("Historical Performance")
        .legend(legend_line(PERFORMANCE_COLOR));
    chart.draw_series(
        historical
            .iter()
            .map(|&p| Circle::new(p, 6, PERFORMANCE_COLOR.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            trend_points.clone(),
            TREND_COLOR.mix(0.7).stroke_width(2),
        ))?
        .label("Projected (Current Trend)")
        .legend(legend_line(TREND_COLOR));
    chart.draw_series(
        trend_points
            .iter()
            .map(|&p| Circle::new(p, 4, TREND_COLOR.mix(0.7).filled())),
    )?;

    for (scenario, values) in report.scenarios.iter() {
        let color = scenario_color(scenario);
        let points = indexed(values, history);
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(format!("With Predictive Maintenance ({})", scenario))
            .legend(legend_line(color));
        chart.draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))?;
    }

    chart
        .draw_series(LineSeries::new(
            vec![(-0.5, report.target), (x_end, report.target)],
            TARGET_COLOR.mix(0.8).stroke_width(3),
        ))?
        .label(format!("Target ({})", report.target))
        .legend(legend_line(TARGET_COLOR));

    if report.has_custom_ceiling() {
        chart
            .draw_series(DashedLineSeries::new(
                vec![(-0.5, report.ceiling), (x_end, report.ceiling)],
                10,
                6,
                CEILING_COLOR.stroke_width(2),
            ))?
            .label(format!("Ceiling ({})", report.ceiling))
            .legend(legend_line(CEILING_COLOR));
    }

    let divider = history as f64 - 0.5;
    let top = y_max.max(95.0);
    chart.draw_series(LineSeries::new(
        vec![(divider, y_min.min(68.0)), (divider, top)],
        DIVIDER_COLOR.mix(0.5).stroke_width(1),
    ))?;
    chart.draw_series(std::iter::once(Text::new(
        "Future Projection",
        (divider + 0.05, top - 1.0),
        (FONT, 14).into_font(),
    )))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn scenario_color(scenario: Scenario) -> RGBColor {
    match scenario {
        Scenario::Conservative => RGBColor(0x06, 0xA7, 0x7D),
        Scenario::Expected => RGBColor(0x05, 0x91, 0x42),
        Scenario::Optimistic => RGBColor(0x03, 0x7F, 0x3C),
    }
}

fn legend_line(color: RGBColor) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
}

/// (offset + i, value) pairs.
fn indexed(values: &[f64], offset: usize) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ((offset + i) as f64, v))
        .collect()
}

fn owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}

/// Quarter label for integer ticks, empty for anything in between.
fn tick_label(labels: &[String], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

/// Min and max of `values`, widened by `padding` on both sides.
fn padded_range(values: impl Iterator<Item = f64>, padding: f64) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 1.0);
    }
    (min - padding, max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarterly_facade::{analyze, AnalysisConfig};

    #[test]
    fn test_tick_label() {
        let labels = vec!["Q1 2024".to_string(), "Q2 2024".to_string()];
        assert_eq!(tick_label(&labels, 0.0), "Q1 2024");
        assert_eq!(tick_label(&labels, 1.0000000001), "Q2 2024");
        assert_eq!(tick_label(&labels, 0.5), "");
        assert_eq!(tick_label(&labels, -1.0), "");
        assert_eq!(tick_label(&labels, 5.0), "");
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([1.0, 5.0, 3.0].into_iter(), 1.0), (0.0, 6.0));
        assert_eq!(padded_range(std::iter::empty(), 1.0), (0.0, 1.0));
    }

    #[test]
    fn test_indexed_offset() {
        assert_eq!(indexed(&[7.0, 8.0], 4), vec![(4.0, 7.0), (5.0, 8.0)]);
    }

    #[test]
    fn test_custom_ceiling_is_labelled_separately() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::builder().ceiling(100.0).build().unwrap();
        let report = analyze(&config).unwrap();

        render_all(&report, dir.path()).unwrap();

        let trend = fs::read_to_string(dir.path().join(TREND_CHART)).unwrap();
        assert!(trend.contains("Target (90)"));
        assert!(!trend.contains("Target (100)"));

        let projection = fs::read_to_string(dir.path().join(PROJECTION_CHART)).unwrap();
        assert!(projection.contains("Target (90)"));
        assert!(projection.contains("Ceiling (100)"));
    }

    #[test]
    fn test_render_all_writes_svg_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("charts");
        let report = analyze(&AnalysisConfig::default()).unwrap();

        let paths = render_all(&report, &out).unwrap();

        assert_eq!(paths.len(), 3);
        for (path, name) in paths.iter().zip([TREND_CHART, BENCHMARK_CHART, PROJECTION_CHART]) {
            assert_eq!(path.file_name().unwrap(), name);
            let contents = fs::read_to_string(path).unwrap();
            assert!(contents.contains("<svg"));
        }
    }
}
