//! # quarterly
//!
//! Command-line report and charts for the quarterly performance analysis.

mod charts;
mod error;

use clap::{Args, Parser, Subcommand};
use error::CliResult;
use quarterly_facade::{analyze, AnalysisConfig, AnalysisReport};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quarterly")]
#[command(about = "Quarterly performance statistics, projections and charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
struct AnalysisArgs {
    /// Number of future quarters to project
    #[arg(short, long, default_value = "4")]
    periods: usize,

    /// Ceiling for improvement scenarios
    #[arg(short, long, default_value = "90.0")]
    ceiling: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statistics and projection report
    Report {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the trend, benchmark and projection charts
    Charts {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Directory the SVG files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print the report and render all charts
    Analyze {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Directory the SVG files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
}

impl AnalysisArgs {
    fn config(&self, output_dir: Option<PathBuf>) -> CliResult<AnalysisConfig> {
        let mut builder = AnalysisConfig::builder()
            .periods(self.periods)
            .ceiling(self.ceiling);
        if let Some(dir) = output_dir {
            builder = builder.output_dir(dir);
        }
        Ok(builder.build()?)
    }
}

/// Run report command
fn run_report(analysis: AnalysisArgs, json: bool) -> CliResult<()> {
    let report = analyze(&analysis.config(None)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Run charts command
fn run_charts(analysis: AnalysisArgs, output_dir: PathBuf) -> CliResult<()> {
    let config = analysis.config(Some(output_dir))?;
    let report = analyze(&config)?;
    write_charts(&report, &config)
}

/// Run analyze command
fn run_analyze(analysis: AnalysisArgs, output_dir: PathBuf) -> CliResult<()> {
    let config = analysis.config(Some(output_dir))?;
    let report = analyze(&config)?;
    print!("{}", report);
    println!();
    write_charts(&report, &config)
}

fn write_charts(report: &AnalysisReport, config: &AnalysisConfig) -> CliResult<()> {
    let paths = charts::render_all(report, &config.output_dir)?;
    for path in &paths {
        println!("Chart saved as {}", path.display());
    }
    info!(count = paths.len(), dir = %config.output_dir.display(), "charts rendered");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quarterly=info".into()),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { analysis, json } => run_report(analysis, json),
        Commands::Charts {
            analysis,
            output_dir,
        } => run_charts(analysis, output_dir),
        Commands::Analyze {
            analysis,
            output_dir,
        } => run_analyze(analysis, output_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
