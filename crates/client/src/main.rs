//! `encounter` binary.
//!
//! Simulates scenarios from the data directory, persists their combat logs
//! and replays archived logs in the terminal.
//!
//! ```bash
//! encounter list
//! encounter simulate goblin_ambush --seed 42 --out ambush.bin
//! encounter replay ambush.bin --digest <hex printed by simulate>
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use commands::{List, Replay, Simulate};

/// Deterministic combat encounters
#[derive(Parser)]
#[command(name = "encounter")]
#[command(about = "Simulate and replay turn-based combat encounters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List scenarios in the data directory
    List(List),

    /// Simulate a scenario and print or archive its combat log
    Simulate(Simulate),

    /// Render an archived combat log
    Replay(Replay),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for ENCOUNTER_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
    }
}
