use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gauge_core::{
    ActionRunner, Actor, Size, TrackerActor, WeightLevel, WeightThresholds, WeightedEntry,
    classify_code, reverse_sequence, sort_sequence,
};

/// gauge: classify weights and size codes from the command line.
#[derive(Debug, Parser)]
#[command(name = "gauge", version)]
struct Cli {
    /// tracing filter (e.g. `debug`, `gauge_core=trace`); falls back to RUST_LOG, then `warn`
    #[arg(long, env = "GAUGE_LOG", global = true)]
    log_level: Option<String>,

    /// weight thresholds as JSON, e.g. '{"light_max":10,"medium_max":100}'
    #[arg(long, global = true)]
    thresholds: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a weight into light / medium / heavy.
    Weight {
        #[arg(allow_negative_numbers = true)]
        weight: i32,
    },
    /// Map a size code ("s", "m", "l") to its size.
    Size { code: String },
    /// Print the numbers in reverse order.
    Reverse {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Print the numbers sorted ascending.
    Sort {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
    /// Classify the value of a key/value entry.
    Entry {
        #[arg(allow_negative_numbers = true)]
        key: i32,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Drive a tracker-backed actor a number of times.
    Act {
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}

#[derive(Debug, Serialize)]
struct WeightReport {
    weight: i32,
    level: WeightLevel,
}

#[derive(Debug, Serialize)]
struct SizeReport {
    code: String,
    size: Size,
}

#[derive(Debug, Serialize)]
struct EntryReport {
    key: i32,
    value: i32,
    level: WeightLevel,
}

#[derive(Debug, Serialize)]
struct ActReport {
    acted: bool,
    act_count: u32,
    last_result: Option<i32>,
    status: i32,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // stdout carries the JSON reports, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_thresholds(raw: Option<&str>) -> Result<WeightThresholds> {
    let Some(raw) = raw else {
        return Ok(WeightThresholds::default_v1());
    };
    serde_json::from_str(raw).context("thresholds must be a JSON object with ordered bounds")
}

/// Run one command and return its report as JSON.
fn run(command: Command, thresholds: &WeightThresholds) -> Result<serde_json::Value> {
    let value = match command {
        Command::Weight { weight } => {
            let level = thresholds.classify(weight)?;
            serde_json::to_value(WeightReport { weight, level })?
        }
        Command::Size { code } => {
            let size = classify_code(Some(&code))?;
            serde_json::to_value(SizeReport { code, size })?
        }
        Command::Reverse { numbers } => serde_json::to_value(reverse_sequence(&numbers))?,
        Command::Sort { numbers } => serde_json::to_value(sort_sequence(&numbers))?,
        Command::Entry { key, value } => {
            let entry = WeightedEntry::new(key, value);
            let level = entry
                .weight_level_with(thresholds)
                .with_context(|| format!("entry key={}", entry.key()))?;
            serde_json::to_value(EntryReport {
                key: entry.key(),
                value: entry.value(),
                level,
            })?
        }
        Command::Act { times } => {
            let mut runner = ActionRunner::new(TrackerActor::new());
            let mut last_result = None;
            for _ in 0..times {
                last_result = Some(runner.act());
            }
            serde_json::to_value(ActReport {
                acted: runner.has_acted(),
                act_count: runner.act_count(),
                last_result,
                status: runner.actor().status(),
            })?
        }
    };
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let thresholds = load_thresholds(cli.thresholds.as_deref())?;
    info!(?thresholds, command = ?cli.command, "running");

    let report = run(cli.command, &thresholds)?;
    println!("{report}");
    Ok(())
}
