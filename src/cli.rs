//! Command-line interface.

use clap::Parser;

/// Tic-tac-toe in the terminal against a heuristic computer opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Single-player tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the engine's random tie-breaking (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shortest simulated thinking delay in milliseconds
    #[arg(long, default_value = "400")]
    pub think_ms_min: u64,

    /// Longest simulated thinking delay in milliseconds
    #[arg(long, default_value = "750")]
    pub think_ms_max: u64,

    /// Minimum interval between accepted placements in milliseconds
    #[arg(long, default_value = "250")]
    pub tap_interval_ms: u64,

    /// File that receives log output while the TUI owns the terminal
    #[arg(long, default_value = "noughts.log")]
    pub log_file: std::path::PathBuf,
}
