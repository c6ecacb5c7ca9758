//! Built-in quarterly dataset and quarter label helpers

use quarterly_spi::{Dataset, DatasetProvider, QuarterRecord};

/// The 2024 quarterly table: performance against a fixed target of 90 and
/// the industry benchmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedQuarterlyDataset;

impl FixedQuarterlyDataset {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetProvider for FixedQuarterlyDataset {
    fn name(&self) -> &str {
        "fixed-2024"
    }

    fn load(&self) -> Dataset {
        Dataset::new(vec![
            QuarterRecord::new("Q1 2024", 70.5, 78.0),
            QuarterRecord::new("Q2 2024", 72.8, 79.5),
            QuarterRecord::new("Q3 2024", 75.2, 80.0),
            QuarterRecord::new("Q4 2024", 74.9, 81.0),
        ])
    }
}

/// Load the built-in dataset.
pub fn load_dataset() -> Dataset {
    FixedQuarterlyDataset.load()
}

/// Labels for the `periods` quarters following `last_label`.
///
/// Labels of the form `Q<1-4> <year>` roll over into the next year. Anything
/// else, or a year past `i32::MAX`, falls back to `<last_label> +<n>`.
pub fn future_quarter_labels(last_label: &str, periods: usize) -> Vec<String> {
    let parsed = parse_quarter(last_label);
    (1..=periods)
        .map(|step| {
            parsed
                .and_then(|(quarter, year)| quarter_after(quarter, year, step))
                .unwrap_or_else(|| format!("{} +{}", last_label, step))
        })
        .collect()
}

/// `Q<n> <year>` label `step` quarters later, `None` if the year overflows.
fn quarter_after(quarter: u32, year: i32, step: usize) -> Option<String> {
    let offset = u64::from(quarter - 1).checked_add(u64::try_from(step).ok()?)?;
    let year = year.checked_add(i32::try_from(offset / 4).ok()?)?;
    Some(format!("Q{} {}", offset % 4 + 1, year))
}

fn parse_quarter(label: &str) -> Option<(u32, i32)> {
    let (quarter, year) = label.trim().split_once(' ')?;
    let quarter: u32 = quarter.strip_prefix('Q')?.parse().ok()?;
    if !(1..=4).contains(&quarter) {
        return None;
    }
    let year: i32 = year.trim().parse().ok()?;
    Some((quarter, year))
}
