//! Encounter inputs as provided by the caller.
//!
//! Specs are never mutated by the engine; initialization copies them into
//! [`CombatantState`](super::CombatantState) values owned by the encounter.

use crate::env::ItemId;
use crate::traits::{Class, Race};

use super::{CombatStats, EnemyStatsPatch, Skills, StatusEffect};

/// Equipped items relevant to combat flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Equipment {
    pub main_hand: Option<ItemId>,
    pub off_hand: Option<ItemId>,
}

impl Equipment {
    pub fn new(main_hand: Option<ItemId>, off_hand: Option<ItemId>) -> Self {
        Self {
            main_hand,
            off_hand,
        }
    }
}

/// The player character entering an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub race: Race,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: Class,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Skills,
    pub stats: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    /// Starting health; `None` means full health.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_health: Option<u32>,
    /// Starting mana; `None` means full mana.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_mana: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effects: Vec<StatusEffect>,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, stats: CombatStats) -> Self {
        Self {
            name: name.into(),
            race: Race::default(),
            class: Class::default(),
            skills: Skills::empty(),
            stats,
            equipment: Equipment::default(),
            current_health: None,
            current_mana: None,
            status_effects: Vec::new(),
        }
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn with_mana(mut self, mana: u32) -> Self {
        self.current_mana = Some(mana);
        self
    }

    pub fn with_status(mut self, effect: StatusEffect) -> Self {
        self.status_effects.push(effect);
        self
    }
}

/// A hostile combatant as authored in game content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    /// Base display name; duplicates get ordinal suffixes at encounter start.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub race: Option<Race>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: EnemyStatsPatch,
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_health: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_effects: Vec<StatusEffect>,
}

impl EnemySpec {
    pub fn new(name: impl Into<String>, stats: EnemyStatsPatch) -> Self {
        Self {
            name: name.into(),
            stats,
            ..Default::default()
        }
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn with_status(mut self, effect: StatusEffect) -> Self {
        self.status_effects.push(effect);
        self
    }
}
