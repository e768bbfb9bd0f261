//! Data-driven encounter content and loaders.
//!
//! This crate houses the content an encounter is built from and provides
//! loaders for RON/TOML data files:
//! - Item catalogs (`items.ron`), served to the engine through [`ItemCatalog`]
//! - The bestiary of enemy templates (`enemies.ron`)
//! - Named scenarios pairing a player with enemies (`scenarios/*.ron`)
//! - Combat balance configuration (`config.toml`)
//!
//! Content is consumed through encounter-core's oracles and specs and never
//! appears in a combat log.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ItemCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    Bestiary, BestiaryLoader, ConfigLoader, ContentFactory, EnemyRef, ItemLoader, LoadResult,
    Scenario, ScenarioLoader,
};
