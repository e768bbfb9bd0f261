//! Damage calculation.
//!
//! # Formula
//!
//! ```text
//! effective_armor = (armor - flat_pen) × (100 - pct_pen) / 100
//! physical        = roll - effective_armor
//! magic           = roll × (100 - magic_resistance) / 100
//! crit            = damage × crit_damage / 100
//! bonus           = damage × (100 + bonus_percent) / 100
//! final           = max(damage after reductions, 1)
//! ```
//!
//! All arithmetic is integer with flooring, so identical inputs always yield
//! identical damage.

use crate::state::CombatStats;

/// Minimum damage dealt by any connecting attack.
pub const MIN_DAMAGE: u32 = 1;

/// Defender armor after the attacker's flat then percentage penetration.
pub fn effective_armor(defender: &CombatStats, attacker: &CombatStats) -> u32 {
    let after_flat = defender.armor.saturating_sub(attacker.armor_penetration);
    let kept_percent = 100u32.saturating_sub(attacker.armor_penetration_percent);
    scale(after_flat, kept_percent)
}

/// Physical damage after armor.
pub fn mitigate_physical(raw: u32, armor: u32) -> u32 {
    raw.saturating_sub(armor)
}

/// Magic damage after the defender's resistance.
pub fn mitigate_magic(raw: u32, magic_resistance: u32) -> u32 {
    scale(raw, 100u32.saturating_sub(magic_resistance))
}

/// Applies the crit multiplier (percent).
pub fn apply_crit(damage: u32, crit_damage: u32) -> u32 {
    scale(damage, crit_damage)
}

/// Adds `bonus_percent` on top of `damage`.
pub fn apply_bonus(damage: u32, bonus_percent: u32) -> u32 {
    scale(damage, 100u32.saturating_add(bonus_percent))
}

/// Removes `percent` of `damage`. Returns `(remaining, removed)`.
pub fn reduce_by_percent(damage: u32, percent: u32) -> (u32, u32) {
    let removed = scale(damage, percent.min(100));
    (damage - removed, removed)
}

/// Floors connecting damage at [`MIN_DAMAGE`].
pub fn floor_damage(damage: u32) -> u32 {
    damage.max(MIN_DAMAGE)
}

/// `value × percent / 100`, floored, computed in 64 bits.
pub fn scale(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
