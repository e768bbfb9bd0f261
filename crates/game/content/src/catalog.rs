//! In-memory item catalog backing the engine's item oracle.

use std::collections::HashMap;

use encounter_core::{ItemId, ItemOracle, ItemTemplate};

/// Item templates keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    items: HashMap<ItemId, ItemTemplate>,
}

impl ItemCatalog {
    /// Builds a catalog. Later templates replace earlier ones with the same id.
    pub fn from_templates(templates: impl IntoIterator<Item = ItemTemplate>) -> Self {
        let mut items = HashMap::new();
        for template in templates {
            if let Some(previous) = items.insert(template.id.clone(), template) {
                tracing::warn!(item = %previous.id, "duplicate item id, keeping the last definition");
            }
        }
        Self { items }
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemTemplate> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn template(&self, id: &ItemId) -> Option<ItemTemplate> {
        self.items.get(id).cloned()
    }
}
