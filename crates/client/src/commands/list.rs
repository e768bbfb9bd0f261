//! Lists scenarios available in the data directory.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::DataDir;

/// List scenarios in the data directory
#[derive(Parser)]
pub struct List {
    #[command(flatten)]
    data_dir: DataDir,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let factory = self.data_dir.factory();
        let names = factory.scenario_names()?;

        if names.is_empty() {
            println!(
                "{} {}",
                style("No scenarios found in").yellow(),
                factory.data_dir().join("scenarios").display()
            );
            return Ok(());
        }

        println!("{}", style("Scenarios:").bold().cyan());
        for name in names {
            let scenario = factory.load_scenario(&name)?;
            let seed = scenario
                .seed
                .map_or_else(|| "unseeded".to_string(), |s| format!("seed {}", s));
            println!(
                "  {} - {} vs {} enemies ({})",
                style(&name).bold(),
                scenario.player.name,
                scenario.enemies.len(),
                seed
            );
        }
        Ok(())
    }
}
