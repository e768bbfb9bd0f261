//! Combatant state and encounter inputs.
//!
//! [`CombatantState`] is the mutable record every phase reads and produces.
//! Inputs ([`PlayerSpec`], [`EnemySpec`]) stay owned by the caller.
mod combatant;
mod skills;
mod spec;
mod stats;
mod status;

pub use combatant::{AbilityFlags, CombatantId, CombatantState, Side};
pub use skills::Skills;
pub use spec::{EnemySpec, Equipment, PlayerSpec};
pub use stats::{CombatStats, DamageRange, Element, EnemyStatsPatch, MagicAttack};
pub use status::{StatusEffect, StatusEffectKind, StatusEffects};
