//! Combat resolution system.
//!
//! Pure functions for resolving a single attack. Randomness enters only
//! through the [`RollStream`](crate::env::RollStream) passed in, so a seed
//! reproduces every outcome.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete attack resolution (dodge, crit, damage, side effects)
//! - `dodge_chance` / `crit_chance` / `block_chance`: capped percentage chances
//! - `effective_armor` and friends: integer damage arithmetic

pub mod damage;
pub mod hit;
mod options;
mod resolver;

pub use damage::{MIN_DAMAGE, effective_armor};
pub use hit::{block_chance, crit_chance, dodge_chance};
pub use options::{AttackOptions, ClassOverrides, Hand};
pub use resolver::{AttackContext, AttackResolution, resolve_attack};
