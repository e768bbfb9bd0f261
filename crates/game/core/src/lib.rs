//! Deterministic turn-based encounter resolution.
//!
//! `encounter-core` turns one player and a group of enemies into an ordered,
//! replayable [`CombatLog`]. The engine is a pure function of its inputs:
//! specs stay caller-owned, randomness comes from the [`RngOracle`] in the
//! [`EncounterEnv`], and the log is the only artifact produced. Entry points
//! are [`simulate_encounter`] and [`EncounterEngine`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod log;
pub mod state;
pub mod traits;

pub use combat::{
    AttackContext, AttackOptions, AttackResolution, ClassOverrides, Hand, resolve_attack,
};
pub use config::{CombatConfig, ConfigError};
pub use engine::{
    EncounterEngine, Phase, StatusEffectProcessor, StatusTick, disambiguate_names,
    simulate_encounter,
};
pub use env::{
    EncounterEnv, Env, ItemCategory, ItemId, ItemOracle, ItemTemplate, NoItems, PcgRng,
    RngOracle, RollContext, RollStream,
};
pub use error::{ErrorSeverity, GameError};
pub use log::{
    CombatLog, CombatLogEntry, EffectTag, EnemySnapshot, LogAction, LogEvent, Outcome, Snapshot,
};
pub use state::{
    AbilityFlags, CombatStats, CombatantId, CombatantState, DamageRange, Element, EnemySpec,
    EnemyStatsPatch, Equipment, MagicAttack, PlayerSpec, Side, Skills, StatusEffect,
    StatusEffectKind, StatusEffects,
};
pub use traits::{Class, ClassTraits, Race, RaceTraits};
