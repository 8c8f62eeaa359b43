//! # Bounds Safety Demonstration Daemon (boundsafed)
//!
//! Replays classic out-of-bounds array access patterns against the
//! bounds-checked containers and shows each unsafe access being refused
//! instead of corrupting adjacent memory.
//!
//! ## Usage
//!
//! ```bash
//! boundsafed [--scenario <name>] [--index <i64>] [--size <i64>] [--strict]
//! ```
//!
//! Without `--scenario` every scenario runs in order:
//! - `off-by-one`: a loop with a `<=` bound over a capacity-10 array, then a
//!   literal write at 15 and a literal read at 20
//! - `runtime-overrun`: a buffer sized at run time (`--size`, default 5)
//!   written by a loop of 10
//! - `user-index`: one write at the caller-supplied `--index` (default 100)
//!   into a capacity-8 array
//! - `safe-loop`: the corrected loop, bounded by the container's capacity
//!
//! By default rejected accesses are logged and the run continues. With
//! `--strict` the first rejection ends the run with a failure status.
//!
//! Logging honours `RUST_LOG` for filtering and `RUST_LOG_FORMAT`
//! (`pretty`, `json`, `compact`) for output format.

#![warn(missing_docs)]

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod scenario_limits;
mod scenarios;

use scenarios::{AccessPolicy, RunOptions, Scenario, ScenarioReport};

/// Bounds safety demonstration CLI arguments
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario to replay; all of them when omitted
    #[arg(short, long, value_enum)]
    scenario: Option<Scenario>,

    /// Caller-controlled index for the user-index scenario
    #[arg(short, long, allow_negative_numbers = true, default_value_t = scenario_limits::user_index::DEFAULT_INDEX)]
    index: i64,

    /// Requested size of the runtime-overrun buffer (at most 4096)
    #[arg(
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(..=scenario_limits::runtime_overrun::MAX_SIZE),
        default_value_t = scenario_limits::runtime_overrun::DEFAULT_SIZE
    )]
    size: i64,

    /// Fail on the first rejected access instead of containing it
    #[arg(long, help = "Abort on the first rejected access")]
    strict: bool,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            policy:       if self.strict {
                AccessPolicy::Strict
            } else {
                AccessPolicy::Contain
            },
            user_index:   self.index,
            runtime_size: self.size,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    initialize_tracing();

    // Parse command line arguments
    let args = Args::parse();
    let options = args.run_options();

    match args.scenario {
        Some(scenario) => info!("Replaying scenario {}", scenario.name()),
        None => info!("Replaying all scenarios"),
    }

    let reports = scenarios::run(args.scenario, &options, display_report)
        .context("Scenario run aborted")?;

    display_summary(&reports);

    Ok(())
}

/// Initialize the tracing system for logging
fn initialize_tracing() {
    let format = env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}

/// Log the outcome of one scenario
fn display_report(report: &ScenarioReport) {
    info!("=== Scenario {} ===", report.scenario.name());
    info!("Accepted accesses:     {}", report.accepted);
    info!("Rejected accesses:     {}", report.rejections.len());
    for rejection in &report.rejections {
        warn!(
            "  - {} at index {} (capacity {}): {}",
            rejection.operation, rejection.index, rejection.capacity, rejection.error
        );
    }
    info!("Final contents:        {:?}", report.snapshot);
}

/// Log totals across all scenarios
fn display_summary(reports: &[ScenarioReport]) {
    let rejected: usize = reports.iter().map(|r| r.rejections.len()).sum();
    let contained = reports.iter().filter(|r| r.has_rejections()).count();

    info!("=== Summary ===");
    info!("Scenarios run:         {}", reports.len());
    info!("Scenarios with contained violations: {}", contained);
    info!("Out-of-range accesses contained:     {}", rejected);
}
