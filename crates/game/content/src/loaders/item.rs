//! Item catalog loader.

use std::path::Path;

use encounter_core::ItemTemplate;
use serde::Deserialize;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct ItemCatalogFile {
    items: Vec<ItemTemplate>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load an item catalog from a RON file.
    ///
    /// RON format: `(items: [(id: "longbow", category: Weapon, ranged: true), ...])`
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(ItemCatalog::from_templates(file.items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::{ItemCategory, ItemId, ItemOracle};

    #[test]
    fn parses_catalog() {
        let catalog = ItemLoader::parse(
            r#"(items: [
                (id: "longbow", category: Weapon, ranged: true),
                (id: "buckler", category: Shield),
            ])"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let buckler = catalog.template(&ItemId::new("buckler")).unwrap();
        assert_eq!(buckler.category, ItemCategory::Shield);
        assert!(!buckler.ranged);
    }

    #[test]
    fn rejects_unknown_category() {
        let result = ItemLoader::parse(r#"(items: [(id: "orb", category: Relic)])"#);
        assert!(result.is_err());
    }
}
