//! `blockcheck` CLI — check block placements and list free time from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Can 09:30-10:30 go onto the day in schedule.json?
//! blockcheck check 09:30-10:30 --schedule schedule.json
//!
//! # Same, schedule piped through stdin, JSON result
//! cat schedule.json | blockcheck check 09:30-10:30 --schedule - --json
//!
//! # Free slots of at least 45 minutes during working hours
//! blockcheck free --schedule schedule.json --window 08:00-17:00 --min 45
//! ```
//!
//! A schedule is a JSON array of `{"start": <min>, "end": <min>}` objects;
//! full block records (`id`, `title`, `category`) are accepted too.
//!
//! Exit status: 0 when the block fits, 1 on conflict, 2 on invalid input.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use block_validator::block::intervals_of;
use block_validator::clock::{format_range, parse_range};
use block_validator::freebusy::{find_first_free_slot, find_free_slots, FreeSlot};
use block_validator::{check_placement, find_conflicts, Interval, TimeBlock, ValidationError};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "blockcheck",
    version,
    about = "Check time-block placements against a day schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log validation decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a block can be placed without overlapping the schedule
    Check {
        /// Candidate block as HH:MM-HH:MM
        range: String,
        /// Schedule JSON file ("-" reads stdin; empty day if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List free slots in the schedule
    Free {
        /// Schedule JSON file ("-" reads stdin; empty day if omitted)
        #[arg(short, long)]
        schedule: Option<String>,
        /// Window to search, as HH:MM-HH:MM
        #[arg(short, long, default_value = "00:00-24:00")]
        window: String,
        /// Only report the first slot at least this many minutes long
        #[arg(long)]
        min: Option<i64>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CheckReport {
    candidate: Interval,
    placeable: bool,
    conflicts: Vec<ConflictReport>,
}

#[derive(Serialize)]
struct ConflictReport {
    index: usize,
    start: i32,
    end: i32,
    overlap_minutes: i64,
}

const EXIT_CONFLICT: u8 = 1;
const EXIT_INVALID: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Check {
            range,
            schedule,
            json,
        } => {
            let candidate = parse_range(&range).context("Invalid candidate range")?;
            let existing = load_schedule(schedule.as_deref())?;

            match check_placement(&candidate, &existing) {
                Ok(()) | Err(ValidationError::Overlap { .. }) => {}
                Err(err) => return Err(err).context("Candidate cannot be placed"),
            }

            let conflicts: Vec<ConflictReport> = find_conflicts(&candidate, &existing)
                .into_iter()
                .map(|c| ConflictReport {
                    index: c.index,
                    start: c.existing.start,
                    end: c.existing.end,
                    overlap_minutes: c.overlap_minutes,
                })
                .collect();
            let report = CheckReport {
                candidate,
                placeable: conflicts.is_empty(),
                conflicts,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.placeable {
                println!("ok: {} is free", format_range(&candidate));
            } else {
                for c in &report.conflicts {
                    println!(
                        "conflict with {} ({} min)",
                        format_range(&Interval::new(c.start, c.end)),
                        c.overlap_minutes
                    );
                }
            }

            Ok(if report.placeable {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_CONFLICT)
            })
        }
        Commands::Free {
            schedule,
            window,
            min,
            json,
        } => {
            let window = parse_range(&window).context("Invalid window")?;
            let existing = load_schedule(schedule.as_deref())?;

            let slots: Vec<FreeSlot> = match min {
                Some(min) => find_first_free_slot(&existing, &window, min)
                    .into_iter()
                    .collect(),
                None => find_free_slots(&existing, &window),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else if slots.is_empty() {
                println!("no free slots");
            } else {
                for slot in &slots {
                    println!(
                        "{} ({} min)",
                        format_range(&slot.interval()),
                        slot.duration_minutes
                    );
                }
            }

            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read a schedule file (or stdin for `-`) into the intervals it contains.
fn load_schedule(path: Option<&str>) -> Result<Vec<Interval>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = read_input(path)?;
    let blocks: Vec<TimeBlock> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid schedule JSON in {}", path))?;
    debug!(count = blocks.len(), path, "loaded schedule");
    Ok(intervals_of(&blocks))
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}
