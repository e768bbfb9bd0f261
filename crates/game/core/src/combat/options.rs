//! Per-attack override bundle.

/// Hand an attack is made with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    #[default]
    Main,
    Off,
}

/// Class-granted overrides for a specific attack (opening strike, first
/// swing of the turn).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassOverrides {
    pub force_crit: bool,
    pub ignore_dodge: bool,
}

impl ClassOverrides {
    pub const NONE: Self = Self {
        force_crit: false,
        ignore_dodge: false,
    };

    pub const GUARANTEED_HIT: Self = Self {
        force_crit: false,
        ignore_dodge: true,
    };

    pub const GUARANTEED_CRIT: Self = Self {
        force_crit: true,
        ignore_dodge: false,
    };
}

/// Options for a single resolver call.
///
/// Defaults to a plain main-hand attack. Overrides can only be attached to
/// main-hand options; off-hand attacks never inherit class overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackOptions {
    hand: Hand,
    force_crit: bool,
    ignore_dodge: bool,
}

impl AttackOptions {
    pub const fn main_hand() -> Self {
        Self {
            hand: Hand::Main,
            force_crit: false,
            ignore_dodge: false,
        }
    }

    pub const fn off_hand() -> Self {
        Self {
            hand: Hand::Off,
            force_crit: false,
            ignore_dodge: false,
        }
    }

    pub const fn for_hand(hand: Hand) -> Self {
        match hand {
            Hand::Main => Self::main_hand(),
            Hand::Off => Self::off_hand(),
        }
    }

    /// Attaches class overrides. No-op for off-hand options.
    pub const fn with_overrides(self, overrides: ClassOverrides) -> Self {
        match self.hand {
            Hand::Main => Self {
                hand: Hand::Main,
                force_crit: overrides.force_crit,
                ignore_dodge: overrides.ignore_dodge,
            },
            Hand::Off => self,
        }
    }

    pub const fn hand(&self) -> Hand {
        self.hand
    }

    pub const fn force_crit(&self) -> bool {
        self.force_crit
    }

    pub const fn ignore_dodge(&self) -> bool {
        self.ignore_dodge
    }
}
