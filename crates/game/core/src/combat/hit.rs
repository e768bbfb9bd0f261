//! Avoidance and critical-hit chances.

use crate::state::CombatantState;

/// Chance (percent) that `defender` dodges an incoming attack, including the
/// racial dodge bonus. Capped at 100.
pub fn dodge_chance(defender: &CombatantState) -> u32 {
    defender
        .stats
        .dodge_chance
        .saturating_add(defender.race_traits().dodge_bonus)
        .min(100)
}

/// Chance (percent) that `attacker` lands a critical hit. Capped at 100.
pub fn crit_chance(attacker: &CombatantState) -> u32 {
    attacker.stats.crit_chance.min(100)
}

/// Chance (percent) that `defender` blocks a connecting hit. Capped at 100.
pub fn block_chance(defender: &CombatantState) -> u32 {
    defender.stats.block_chance.min(100)
}
