//! Read-only collaborators consumed by the engine.
//!
//! Oracles expose item templates and randomness. The [`Env`] aggregate
//! bundles them with the balance configuration so the engine can reach
//! everything it needs without coupling to concrete implementations.
mod items;
mod rng;

pub use items::{ItemCategory, ItemId, ItemOracle, ItemTemplate, NoItems};
pub use rng::{PcgRng, RngOracle, RollContext, RollStream, compute_seed};

use crate::config::CombatConfig;

/// Aggregates the read-only oracles and configuration used by one or more
/// encounters.
///
/// `Env` is `Copy`-cheap to pass around and never mutated by the engine, so a
/// single value can be shared by independent simulations on different threads.
pub struct Env<'a, I, R>
where
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    items: &'a I,
    rng: &'a R,
    config: &'a CombatConfig,
}

impl<I, R> Clone for Env<'_, I, R>
where
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, R> Copy for Env<'_, I, R>
where
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type EncounterEnv<'a> = Env<'a, dyn ItemOracle + 'a, dyn RngOracle + 'a>;

impl<'a, I, R> Env<'a, I, R>
where
    I: ItemOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(items: &'a I, rng: &'a R, config: &'a CombatConfig) -> Self {
        Self { items, rng, config }
    }

    pub fn items(&self) -> &'a I {
        self.items
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }

    pub fn config(&self) -> &'a CombatConfig {
        self.config
    }
}

impl<'a> EncounterEnv<'a> {
    /// Builds a type-erased env from concrete oracles.
    pub fn from_parts(
        items: &'a (dyn ItemOracle + 'a),
        rng: &'a (dyn RngOracle + 'a),
        config: &'a CombatConfig,
    ) -> Self {
        Self::new(items, rng, config)
    }

    /// Looks up an equipped item, treating unknown ids as absent.
    pub fn item(&self, id: &ItemId) -> Option<ItemTemplate> {
        let template = self.items.template(id);
        if template.is_none() {
            tracing::debug!(item = %id, "unknown item template, treating as unequipped");
        }
        template
    }
}

impl core::fmt::Debug for EncounterEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EncounterEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
