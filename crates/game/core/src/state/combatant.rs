use crate::traits::{Class, Race, RaceTraits};

use super::{CombatStats, Skills, StatusEffectKind, StatusEffects};

/// Identifier of a combatant within one encounter.
///
/// Enemies are addressed by their position in the original enemy list
/// (`index + 1`); names are display data only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl CombatantId {
    /// Reserved identifier for the player character.
    pub const PLAYER: Self = Self(0);

    /// Identifier of the enemy at `index` in the original enemy list.
    pub const fn enemy(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }

    /// Position in the enemy list, `None` for the player.
    pub const fn enemy_index(self) -> Option<usize> {
        if self.is_player() {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }
}

/// Which side of the encounter a combatant fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

/// One-shot and escalating ability bookkeeping for a single encounter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbilityFlags {
    pub hard_skin_used: bool,
    pub mana_surge_used: bool,
    pub frenzy_stacks: u32,
}

/// Mutable per-combatant record for the lifetime of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantState {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    pub race: Option<Race>,
    pub class: Option<Class>,
    pub skills: Skills,
    pub stats: CombatStats,
    pub current_health: u32,
    pub current_mana: u32,
    pub status_effects: StatusEffects,
    pub flags: AbilityFlags,
}

impl CombatantState {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn is_player(&self) -> bool {
        self.side == Side::Player
    }

    pub fn has_skill(&self, skill: Skills) -> bool {
        self.skills.contains(skill)
    }

    pub fn race_traits(&self) -> RaceTraits {
        self.race.map_or(RaceTraits::BASELINE, Race::traits)
    }

    /// Attacks this combatant performs this turn: base count minus
    /// reduced-attacks stacks, never below one.
    pub fn effective_attacks(&self) -> u32 {
        let reduced = self.status_effects.stacks(StatusEffectKind::ReducedAttacks);
        self.stats.attacks_per_round.saturating_sub(reduced).max(1)
    }

    pub fn is_frozen(&self) -> bool {
        self.status_effects.has(StatusEffectKind::Frozen)
    }

    /// Applies damage, clamping health at zero. Returns the health removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);
        before - self.current_health
    }

    /// Restores health up to the cap. Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.stats.max_health.saturating_sub(self.current_health));
        self.current_health += gained;
        gained
    }

    /// Restores mana up to the cap. Returns the mana actually gained.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.stats.max_mana.saturating_sub(self.current_mana));
        self.current_mana += gained;
        gained
    }

    /// Spends mana if enough is available.
    pub fn try_spend_mana(&mut self, cost: u32) -> bool {
        if self.current_mana < cost {
            return false;
        }
        self.current_mana -= cost;
        true
    }
}
