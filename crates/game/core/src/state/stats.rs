//! Combat-relevant numeric attributes.
//!
//! Stats arrive pre-aggregated: equipment, affixes and attributes are folded
//! in by the caller. The engine only reads them.

/// Inclusive damage range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Returns the range with bounds in ascending order.
    pub const fn normalized(self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }
}

/// Elemental flavour of a magic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Fire,
    Frost,
    Lightning,
    Arcane,
}

/// Chance-based alternate attack that costs mana.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicAttack {
    /// Percent chance an attack becomes a magic attack.
    pub chance: u32,
    pub mana_cost: u32,
    pub damage: DamageRange,
    pub element: Element,
}

/// Full combat stat block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatStats {
    pub max_health: u32,
    pub max_mana: u32,

    pub damage: DamageRange,
    /// Off-hand damage when dual-wielding. Falls back to `damage`.
    pub off_hand_damage: Option<DamageRange>,

    pub armor: u32,
    pub armor_penetration: u32,
    /// Percent of the remaining armor ignored after flat penetration.
    pub armor_penetration_percent: u32,
    /// Percent of magic damage ignored.
    pub magic_resistance: u32,

    pub crit_chance: u32,
    /// Crit damage multiplier in percent (150 = ×1.5).
    pub crit_damage: u32,
    pub dodge_chance: u32,
    pub block_chance: u32,

    pub attacks_per_round: u32,
    pub mana_regen: u32,

    pub life_steal_percent: u32,
    pub life_steal_flat: u32,
    pub mana_steal_percent: u32,
    pub mana_steal_flat: u32,

    pub magic_attack: Option<MagicAttack>,

    /// On-hit proc chances (percent).
    pub burn_chance: u32,
    pub freeze_chance: u32,
    pub slow_chance: u32,
}

impl CombatStats {
    pub const DEFAULT_CRIT_DAMAGE: u32 = 150;

    /// The default-stat template: 1 HP, 1 damage, no chances, one attack per
    /// turn, 150% crit damage.
    pub const fn baseline() -> Self {
        Self {
            max_health: 1,
            max_mana: 0,
            damage: DamageRange::fixed(1),
            off_hand_damage: None,
            armor: 0,
            armor_penetration: 0,
            armor_penetration_percent: 0,
            magic_resistance: 0,
            crit_chance: 0,
            crit_damage: Self::DEFAULT_CRIT_DAMAGE,
            dodge_chance: 0,
            block_chance: 0,
            attacks_per_round: 1,
            mana_regen: 0,
            life_steal_percent: 0,
            life_steal_flat: 0,
            mana_steal_percent: 0,
            mana_steal_flat: 0,
            magic_attack: None,
            burn_chance: 0,
            freeze_chance: 0,
            slow_chance: 0,
        }
    }

    /// Repairs values the engine cannot work with: inverted ranges, zero
    /// health caps and zero attack counts.
    pub fn sanitized(mut self) -> Self {
        self.max_health = self.max_health.max(1);
        self.attacks_per_round = self.attacks_per_round.max(1);
        self.damage = self.damage.normalized();
        self.off_hand_damage = self.off_hand_damage.map(DamageRange::normalized);
        if let Some(magic) = self.magic_attack.as_mut() {
            magic.damage = magic.damage.normalized();
        }
        self
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Partial enemy stats as authored in game content.
///
/// Every omitted field falls back to [`CombatStats::baseline`]. Enemies have
/// no life steal, mana steal or magic attack fields: those branches stay
/// player-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyStatsPatch {
    pub max_health: Option<u32>,
    pub max_mana: Option<u32>,
    pub damage: Option<DamageRange>,
    pub armor: Option<u32>,
    pub armor_penetration: Option<u32>,
    pub armor_penetration_percent: Option<u32>,
    pub magic_resistance: Option<u32>,
    pub crit_chance: Option<u32>,
    pub crit_damage: Option<u32>,
    pub dodge_chance: Option<u32>,
    pub block_chance: Option<u32>,
    pub attacks_per_turn: Option<u32>,
    pub mana_regen: Option<u32>,
    pub burn_chance: Option<u32>,
    pub freeze_chance: Option<u32>,
    pub slow_chance: Option<u32>,
}

impl EnemyStatsPatch {
    /// Merges the patch over the default template.
    pub fn resolve(&self) -> CombatStats {
        let base = CombatStats::baseline();
        CombatStats {
            max_health: self.max_health.unwrap_or(base.max_health),
            max_mana: self.max_mana.unwrap_or(base.max_mana),
            damage: self.damage.unwrap_or(base.damage),
            armor: self.armor.unwrap_or(base.armor),
            armor_penetration: self.armor_penetration.unwrap_or(base.armor_penetration),
            armor_penetration_percent: self
                .armor_penetration_percent
                .unwrap_or(base.armor_penetration_percent),
            magic_resistance: self.magic_resistance.unwrap_or(base.magic_resistance),
            crit_chance: self.crit_chance.unwrap_or(base.crit_chance),
            crit_damage: self.crit_damage.unwrap_or(base.crit_damage),
            dodge_chance: self.dodge_chance.unwrap_or(base.dodge_chance),
            block_chance: self.block_chance.unwrap_or(base.block_chance),
            attacks_per_round: self.attacks_per_turn.unwrap_or(base.attacks_per_round),
            mana_regen: self.mana_regen.unwrap_or(base.mana_regen),
            burn_chance: self.burn_chance.unwrap_or(base.burn_chance),
            freeze_chance: self.freeze_chance.unwrap_or(base.freeze_chance),
            slow_chance: self.slow_chance.unwrap_or(base.slow_chance),
            ..base
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_resolves_to_template() {
        let stats = EnemyStatsPatch::default().resolve();
        assert_eq!(stats.max_health, 1);
        assert_eq!(stats.damage, DamageRange::fixed(1));
        assert_eq!(stats.attacks_per_round, 1);
        assert_eq!(stats.crit_damage, 150);
        assert_eq!(stats.dodge_chance, 0);
        assert_eq!(stats.crit_chance, 0);
    }

    #[test]
    fn patch_overrides_only_given_fields() {
        let patch = EnemyStatsPatch {
            max_health: Some(40),
            armor: Some(3),
            ..Default::default()
        };
        let stats = patch.resolve();
        assert_eq!(stats.max_health, 40);
        assert_eq!(stats.armor, 3);
        assert_eq!(stats.damage, DamageRange::fixed(1));
    }

    #[test]
    fn sanitize_repairs_degenerate_values() {
        let stats = CombatStats {
            max_health: 0,
            attacks_per_round: 0,
            damage: DamageRange::new(9, 4),
            ..CombatStats::baseline()
        }
        .sanitized();
        assert_eq!(stats.max_health, 1);
        assert_eq!(stats.attacks_per_round, 1);
        assert_eq!(stats.damage, DamageRange::new(4, 9));
    }
}
