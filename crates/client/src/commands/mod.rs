//! Subcommands of the `encounter` binary.

mod list;
mod replay;
mod simulate;

pub use list::List;
pub use replay::Replay;
pub use simulate::Simulate;

use std::path::PathBuf;

use clap::Args;
use encounter_content::ContentFactory;

/// Location of the content data directory.
#[derive(Args, Clone, Debug)]
pub struct DataDir {
    /// Directory holding config.toml, items.ron, enemies.ron and scenarios/
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "DIR",
        env = "ENCOUNTER_DATA_DIR",
        default_value = "data"
    )]
    pub path: PathBuf,
}

impl DataDir {
    pub fn factory(&self) -> ContentFactory {
        ContentFactory::new(&self.path)
    }
}
