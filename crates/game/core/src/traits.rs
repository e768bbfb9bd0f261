//! Race and class identity with their combat capabilities.
//!
//! Race/class behaviour is table-driven: the resolver and the status processor
//! ask for [`RaceTraits`] / [`ClassTraits`] instead of comparing identities.
//! Adding a race or class means adding a variant and a table row.

use crate::combat::ClassOverrides;

/// Character race.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    /// Human - versatile, no racial modifiers
    #[default]
    Human,
    /// Elf - agile
    Elf,
    /// Dwarf - sturdy, shrugs off lingering effects twice as fast
    Dwarf,
    /// Gnome - small, harder to hit
    Gnome,
    /// Orc - strong
    Orc,
}

/// Character class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Class {
    /// Warrior - first swing of every turn cannot be dodged
    #[default]
    Warrior,
    /// Ranger - ranged opening strike always connects
    Ranger,
    /// Rogue - ranged opening strike always crits
    Rogue,
    /// Mage - no martial overrides
    Mage,
}

/// Race-keyed combat capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaceTraits {
    /// Turns of duration removed from every status effect per turn.
    pub status_decay: i32,
    /// Flat bonus added to dodge chance (percentage points).
    pub dodge_bonus: u32,
}

impl RaceTraits {
    pub const BASELINE: Self = Self {
        status_decay: 1,
        dodge_bonus: 0,
    };
}

/// Class-keyed combat capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassTraits {
    /// Overrides for the pre-combat ranged opening strike.
    pub opening_strike: ClassOverrides,
    /// Overrides for the first main-hand attack of every turn.
    pub turn_opener: ClassOverrides,
}

impl Race {
    pub const fn traits(self) -> RaceTraits {
        match self {
            Race::Dwarf => RaceTraits {
                status_decay: 2,
                ..RaceTraits::BASELINE
            },
            Race::Gnome => RaceTraits {
                dodge_bonus: 5,
                ..RaceTraits::BASELINE
            },
            Race::Human | Race::Elf | Race::Orc => RaceTraits::BASELINE,
        }
    }
}

impl Class {
    pub const fn traits(self) -> ClassTraits {
        match self {
            Class::Warrior => ClassTraits {
                opening_strike: ClassOverrides::NONE,
                turn_opener: ClassOverrides::GUARANTEED_HIT,
            },
            Class::Ranger => ClassTraits {
                opening_strike: ClassOverrides::GUARANTEED_HIT,
                turn_opener: ClassOverrides::NONE,
            },
            Class::Rogue => ClassTraits {
                opening_strike: ClassOverrides::GUARANTEED_CRIT,
                turn_opener: ClassOverrides::NONE,
            },
            Class::Mage => ClassTraits {
                opening_strike: ClassOverrides::NONE,
                turn_opener: ClassOverrides::NONE,
            },
        }
    }
}
