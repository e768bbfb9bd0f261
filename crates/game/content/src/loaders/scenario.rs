//! Scenario loader.
//!
//! A scenario pairs one player with an ordered list of enemies, either
//! referenced from the bestiary or written inline.

use std::path::Path;

use encounter_core::{EnemySpec, PlayerSpec};
use serde::Deserialize;

use crate::loaders::{Bestiary, LoadResult, read_file};

/// Enemy slot in a scenario.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum EnemyRef {
    /// Template id in the bestiary.
    Bestiary(String),
    /// Enemy defined in the scenario itself.
    Inline(EnemySpec),
}

/// One ready-to-run encounter setup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    pub player: PlayerSpec,
    pub enemies: Vec<EnemyRef>,
    /// Default seed when the caller does not pick one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Scenario {
    /// Resolves enemy slots against `bestiary`, keeping scenario order.
    pub fn resolve_enemies(&self, bestiary: &Bestiary) -> LoadResult<Vec<EnemySpec>> {
        self.enemies
            .iter()
            .map(|slot| match slot {
                EnemyRef::Bestiary(id) => bestiary.require(id),
                EnemyRef::Inline(spec) => Ok(spec.clone()),
            })
            .collect()
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Scenario {}: {}", path.display(), e))
    }

    /// Parse a scenario from RON text.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.enemies.is_empty() {
            tracing::warn!(player = %scenario.player.name, "scenario has no enemies");
        }
        Ok(scenario)
    }
}
