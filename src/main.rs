//! # cronform — structured schedule ⇄ cron text converter
//!
//! The command-line face of the schedule editor core. It does nothing the
//! library doesn't: classify cron text into a structured schedule, render a
//! structured schedule back to canonical cron text, and preview fire times.
//!
//! Usage:
//!   cronform parse "*/5 * * * *"               # cron text → JSON config
//!   cronform parse "0 9 * * *" "30 18 * * *"   # multi-line daily
//!   cronform generate --file schedule.toml     # config → cron text
//!   echo '{"type":"minutes","interval":5}' | cronform generate
//!   cronform next "0 9 * * MON-FRI" --count 3  # upcoming fire times

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cronform_core::ScheduleConfig;
use cronform_schedule::{generate, parse, upcoming};

#[derive(Parser)]
#[command(
    name = "cronform",
    version,
    about = "Structured schedule ⇄ cron text converter"
)]
struct Cli {
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify cron text and print the structured schedule as JSON
    Parse {
        /// Cron lines, joined with newlines. Reads stdin when omitted.
        lines: Vec<String>,
    },
    /// Generate canonical cron text from a schedule config
    Generate {
        /// Config file (.toml, or JSON otherwise). Reads JSON from stdin
        /// when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show upcoming fire times for cron text
    Next {
        /// Cron lines, joined with newlines. Reads stdin when omitted.
        lines: Vec<String>,
        /// How many occurrences to show
        #[arg(short, long, default_value = "3")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "cronform=debug,cronform_schedule=debug"
    } else {
        "cronform=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Command::Parse { lines } => {
            let text = gather(lines)?;
            let config = parse(&text)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Generate { file } => {
            let config = load_config(file.as_deref())?;
            let cron = generate(&config)?;
            for line in cron.lines() {
                println!("{line}");
            }
        }
        Command::Next { lines, count } => {
            let text = gather(lines)?;
            let config = parse(&text)?;
            let fires = upcoming(&config, chrono::Utc::now(), count);
            if fires.is_empty() {
                tracing::warn!("Schedule never fires");
            }
            for instant in fires {
                println!("{}", instant.format("%Y-%m-%d %H:%M UTC"));
            }
        }
    }
    Ok(())
}

/// Join argument lines, or read stdin when none are given.
fn gather(lines: Vec<String>) -> Result<String> {
    if lines.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        Ok(lines.join("\n"))
    }
}

/// Load a schedule config from a TOML/JSON file, or JSON on stdin.
fn load_config(file: Option<&Path>) -> Result<ScheduleConfig> {
    let Some(path) = file else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return serde_json::from_str(&buf).context("Failed to parse schedule JSON");
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content).context("Failed to parse schedule TOML")
    } else {
        serde_json::from_str(&content).context("Failed to parse schedule JSON")
    }
}
