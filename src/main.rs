//! Terminal tic-tac-toe against a heuristic computer opponent.

use anyhow::Result;
use clap::Parser;
use noughts::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::tui::run(&cli).await
}
