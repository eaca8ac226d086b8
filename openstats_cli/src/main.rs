mod table;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use openstats_engine::{flatten, load_stats_from_path, weekly_average, yearly_totals, YearRange};
use status_panel::events::StatusEvent;
use status_panel::model::StatusState;

#[derive(Debug, Parser)]
#[command(name = "openstats")]
#[command(about = "Open-hours statistics CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Flatten raw yearly statistics into chart records.
    Flatten {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Average open duration per weekday over the trailing weeks.
    Weekly {
        input: PathBuf,
        #[arg(short, long, default_value_t = 4)]
        weeks: u32,
    },
    /// Total and per-day open hours per year.
    Yearly {
        input: PathBuf,
        #[arg(long)]
        start_year: Option<i32>,
        #[arg(long)]
        first_year_days: Option<i64>,
    },
    /// Replay a status event log and print the resulting panel.
    Status { events: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Flatten { input, output } => {
            let flat = load_and_flatten(&input)?;
            let json =
                serde_json::to_string_pretty(&flat).context("failed to serialize records")?;
            let out_path = output.unwrap_or_else(|| default_output_path(&input));
            fs::write(&out_path, json)
                .with_context(|| format!("failed to write: {}", out_path.display()))?;
        }
        Command::Weekly { input, weeks } => {
            let flat = load_and_flatten(&input)?;
            let rows = weekly_average(&flat, weeks)
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("weekly aggregation failed: {}", input.display()))?;
            print!("{}", table::weekly_table(&rows));
        }
        Command::Yearly {
            input,
            start_year,
            first_year_days,
        } => {
            let flat = load_and_flatten(&input)?;
            let defaults = YearRange::default();
            let range = YearRange {
                start_year: start_year.unwrap_or(defaults.start_year),
                first_year_days: first_year_days.unwrap_or(defaults.first_year_days),
            };
            let stats = yearly_totals(&flat, range, Utc::now().timestamp_millis())
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("yearly aggregation failed: {}", input.display()))?;
            print!("{}", table::yearly_table(&stats));
        }
        Command::Status { events } => {
            let json = fs::read_to_string(&events)
                .with_context(|| format!("failed to read events: {}", events.display()))?;
            let events: Vec<StatusEvent> = serde_json::from_str(&json)
                .context("failed to parse status events json")?;

            let mut state = StatusState::default();
            state.replay(&events);
            print!("{}", table::status_panel(&state, Utc::now().timestamp()));
        }
    }

    Ok(())
}

fn load_and_flatten(input: &Path) -> anyhow::Result<Vec<openstats_schema::FlatRecord>> {
    let raw = load_stats_from_path(input)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .with_context(|| format!("loading stats failed: {}", input.display()))?;
    flatten(&raw)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .with_context(|| format!("flatten failed: {}", input.display()))
}

fn default_output_path(input: &Path) -> PathBuf {
    let mut out = input.to_path_buf();
    out.set_extension("flat.json");
    out
}
