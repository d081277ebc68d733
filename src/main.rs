//! Conference scheduler CLI.
//!
//! Reads a talk list, distributes the talks across tracks and prints the
//! schedule.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

use conference_scheduler::config::SchedulerConfig;
use conference_scheduler::input;
use conference_scheduler::models::Conference;
use conference_scheduler::render::ScheduleRenderer;
use conference_scheduler::scheduler::{GreedyScheduler, ScheduleSummary};
use conference_scheduler::telemetry::{self, LogFormat};
use conference_scheduler::validation::validate_talks;

#[derive(Parser)]
#[command(name = "conference-scheduler")]
#[command(about = "Schedule conference talks into morning and afternoon tracks")]
struct Cli {
    /// Talk list, one talk per line (`<title> <N>min` or `<title> lightning`)
    input: PathBuf,

    /// TOML file overriding session limits and timetable
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schedule output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, env = "CONFERENCE_SCHEDULER_LOG", default_value = "warn")]
    log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    conference: &'a Conference,
    summary: &'a ScheduleSummary,
    rejected: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level, cli.log_format);

    let config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };

    let parsed = input::load_talks(&cli.input)
        .with_context(|| format!("failed to load talks from {}", cli.input.display()))?;
    info!(
        talks = parsed.talks.len(),
        skipped = parsed.skipped.len(),
        "talks loaded"
    );

    if parsed.talks.is_empty() {
        println!("No talks to schedule.");
        return Ok(());
    }

    if let Err(errors) = validate_talks(&parsed.talks, &config.limits) {
        for error in &errors {
            warn!(kind = ?error.kind, "{}", error.message);
        }
    }

    let outcome = GreedyScheduler::new()
        .with_limits(config.limits)
        .schedule(parsed.talks);
    let summary = ScheduleSummary::calculate(&outcome.conference, &config.limits);
    info!(
        tracks = summary.track_count,
        talks = summary.talk_count,
        full_tracks = summary.full_tracks,
        rejected = outcome.rejected.len(),
        "schedule built"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => ScheduleRenderer::new()
            .with_timetable(config.timetable)
            .write_to(&outcome.conference, &mut out)
            .context("failed to write schedule")?,
        OutputFormat::Json => {
            let report = JsonReport {
                conference: &outcome.conference,
                summary: &summary,
                rejected: outcome.rejected.iter().map(ToString::to_string).collect(),
            };
            serde_json::to_writer_pretty(&mut out, &report)
                .context("failed to write schedule")?;
            writeln!(out).context("failed to write schedule")?;
        }
    }

    Ok(())
}
