//! Content loaders for reading encounter data from files.
//!
//! Each loader turns one RON/TOML file into encounter-core types. The
//! [`ContentFactory`] ties them to a data directory layout.

pub mod bestiary;
pub mod config;
pub mod factory;
pub mod item;
pub mod scenario;

pub use bestiary::{Bestiary, BestiaryLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use scenario::{EnemyRef, Scenario, ScenarioLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
