pub mod config;
pub mod csv_export;
pub mod driver;
pub mod error;
pub mod report;
pub mod types;

use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::csv_export::CsvExporter;
use crate::error::Error;
use crate::types::Scenario;
use common::cache_line::CACHE_LINE_SIZE;

fn main() {
    init_tracing();

    let scenario = parse_args();
    let config = match crate::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "could not load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(scenario, &config) {
        error!(error = %e, "benchmark run failed");
        std::process::exit(1);
    }

    info!("All benchmarks completed.");
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse command-line arguments to determine which scenarios to run
fn parse_args() -> Scenario {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        None => Scenario::All,
        Some(arg) => arg.parse().unwrap_or_else(|e: Error| {
            eprintln!(
                "{}\nUsage: {} [layout|false-sharing|all]\n  - layout: row-oriented vs column-oriented sums\n  - false-sharing: unpadded vs padded concurrent sums",
                e, args[0]
            );
            std::process::exit(1);
        }),
    }
}

fn run(scenario: Scenario, config: &Config) -> Result<(), Error> {
    info!(?scenario, cache_line_size = CACHE_LINE_SIZE, "starting benchmarks");

    let mut exporter = config
        .report
        .csv_path
        .as_deref()
        .map(CsvExporter::create)
        .transpose()?;

    if scenario.includes_layout() {
        for &size in &config.layout.sizes {
            let comparison = driver::run_layout_comparison(
                size,
                config.layout.iterations,
                config.report.tie_tolerance,
            );
            println!(
                "{}",
                report::render("Performance Comparison: row-oriented vs column-oriented", &comparison)
            );
            if let Some(exporter) = exporter.as_mut() {
                exporter.write_comparison(&comparison)?;
            }
            driver::ensure_match(&comparison)?;
        }
    }

    if scenario.includes_false_sharing() {
        let comparison = driver::run_false_sharing_comparison(
            config.false_sharing.size,
            config.false_sharing.iterations,
            config.report.tie_tolerance,
        );
        println!(
            "{}",
            report::render("Count Benchmark: unpadded vs padded", &comparison)
        );
        if let Some(exporter) = exporter.as_mut() {
            exporter.write_comparison(&comparison)?;
        }
        driver::ensure_match(&comparison)?;
    }

    if let Some(exporter) = exporter {
        exporter.finish()?;
        if let Some(path) = &config.report.csv_path {
            info!(path = %path.display(), "CSV report written");
        }
    }

    Ok(())
}
