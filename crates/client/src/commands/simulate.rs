//! Runs a scenario through the engine.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use encounter_core::{CombatLog, EncounterEngine, EncounterEnv, PcgRng};

use super::DataDir;
use crate::render;

/// Simulate a scenario and print or archive its combat log
#[derive(Parser)]
pub struct Simulate {
    /// Scenario name (file stem under <DIR>/scenarios)
    #[arg(long, value_name = "NAME")]
    scenario: String,

    /// Seed for the roll stream; defaults to the scenario's seed
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Write the encoded log archive to this file
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    #[command(flatten)]
    data_dir: DataDir,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Colored event list with final standings
    Summary,
    /// Full JSON output
    Json,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let factory = self.data_dir.factory();
        let config = factory.load_config()?;
        let items = factory.load_items()?;
        let bestiary = factory.load_bestiary()?;
        let scenario = factory.load_scenario(&self.scenario)?;
        let enemies = scenario.resolve_enemies(&bestiary)?;

        let seed = self.seed.or(scenario.seed).unwrap_or_else(clock_seed);
        tracing::info!(scenario = %self.scenario, seed, "simulating");

        let rng = PcgRng;
        let env = EncounterEnv::from_parts(&items, &rng, &config);
        let log = EncounterEngine::new(env).simulate(&scenario.player, &enemies, seed);

        match self.format {
            OutputFormat::Summary => render::print_log(&log),
            OutputFormat::Json => print_json(&log)?,
        }

        if let Some(path) = &self.out {
            let bytes = log.encode()?;
            let digest = hex::encode(log.digest()?);
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write log archive: {}", path.display()))?;

            // Status goes to stderr so JSON on stdout stays parseable.
            eprintln!(
                "{} {} ({} bytes)",
                style("Archived:").bold().cyan(),
                path.display(),
                bytes.len()
            );
            eprintln!("{} {}", style("Digest:").bold().cyan(), digest);
        }

        Ok(())
    }
}

/// Seed for unseeded scenarios run without `--seed`.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn print_json(log: &CombatLog) -> Result<()> {
    let json = serde_json::to_string_pretty(log).context("Failed to serialize log to JSON")?;
    println!("{}", json);
    Ok(())
}
