//! Enemy template loader.

use std::collections::HashMap;
use std::path::Path;

use encounter_core::EnemySpec;

use crate::loaders::{LoadResult, read_file};

/// Enemy templates keyed by content id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bestiary {
    enemies: HashMap<String, EnemySpec>,
}

impl Bestiary {
    pub fn get(&self, id: &str) -> Option<&EnemySpec> {
        self.enemies.get(id)
    }

    /// Looks up a template, failing with the unknown id.
    pub fn require(&self, id: &str) -> LoadResult<EnemySpec> {
        self.enemies
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Unknown enemy id '{}' in bestiary", id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.enemies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Loader for the bestiary from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load the bestiary from a RON file.
    ///
    /// RON format: `Vec<(String, EnemySpec)>`. Stat fields left out of an
    /// enemy fall back to the engine's default template.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a bestiary from RON text. Duplicate ids are rejected.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let raw: Vec<(String, EnemySpec)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let mut enemies = HashMap::with_capacity(raw.len());
        for (id, spec) in raw {
            if enemies.contains_key(&id) {
                return Err(anyhow::anyhow!("Duplicate enemy id '{}' in bestiary", id));
            }
            enemies.insert(id, spec);
        }

        Ok(Bestiary { enemies })
    }
}
