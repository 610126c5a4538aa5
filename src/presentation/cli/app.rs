use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kilowatch — building energy anomaly detection
///
/// Scans a building's consumption history for spikes, gradual drift and
/// off-hours usage, then turns the findings into recommendations and a
/// savings estimate.
#[derive(Parser, Debug)]
#[command(name = "kilowatch")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a dataset: anomalies, recommendations and savings
    #[command(alias = "a")]
    Analyze {
        /// Dataset file (JSON); falls back to the configured default
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the hourly consumption profile of a dataset
    #[command(alias = "p")]
    Profile {
        /// Dataset file (JSON); falls back to the configured default
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Day type to profile (weekday, weekend)
        #[arg(short, long, default_value = "weekday")]
        day_type: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
