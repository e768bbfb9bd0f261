use crate::error::{ErrorSeverity, GameError};

/// Combat configuration constants and tunable balance parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Hard ceiling on the number of turns before the encounter stops.
    /// Guarantees termination for stalemated configurations (zero damage vs. high armor).
    pub max_turns: u32,

    /// Percent of max health dealt per burning stack at turn start.
    pub burn_percent_per_stack: u32,

    /// Durations (in turns) of effects applied by on-hit procs.
    pub burn_duration: i32,
    pub freeze_duration: i32,
    pub slow_duration: i32,

    /// Percent of incoming damage removed by a successful block.
    pub block_reduction_percent: u32,

    /// Percent of incoming damage removed the one time hard skin fires.
    pub hard_skin_reduction_percent: u32,

    /// Frenzy: bonus damage percent per stack and the stack ceiling.
    pub frenzy_percent_per_stack: u32,
    pub frenzy_max_stacks: u32,

    /// Skirmisher: bonus damage percent per other living enemy.
    pub skirmisher_percent_per_enemy: u32,

    /// Mana surge triggers when mana is at or below this percent of max.
    pub mana_surge_threshold_percent: u32,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 16;
    pub const MAX_HANDS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u32 = 100;
    pub const DEFAULT_BURN_PERCENT: u32 = 5;
    pub const DEFAULT_BURN_DURATION: i32 = 3;
    pub const DEFAULT_FREEZE_DURATION: i32 = 2;
    pub const DEFAULT_SLOW_DURATION: i32 = 2;
    pub const DEFAULT_BLOCK_REDUCTION: u32 = 50;
    pub const DEFAULT_HARD_SKIN_REDUCTION: u32 = 50;
    pub const DEFAULT_FRENZY_PERCENT: u32 = 5;
    pub const DEFAULT_FRENZY_MAX_STACKS: u32 = 5;
    pub const DEFAULT_SKIRMISHER_PERCENT: u32 = 5;
    pub const DEFAULT_MANA_SURGE_THRESHOLD: u32 = 25;

    pub fn new() -> Self {
        Self {
            max_turns: Self::DEFAULT_MAX_TURNS,
            burn_percent_per_stack: Self::DEFAULT_BURN_PERCENT,
            burn_duration: Self::DEFAULT_BURN_DURATION,
            freeze_duration: Self::DEFAULT_FREEZE_DURATION,
            slow_duration: Self::DEFAULT_SLOW_DURATION,
            block_reduction_percent: Self::DEFAULT_BLOCK_REDUCTION,
            hard_skin_reduction_percent: Self::DEFAULT_HARD_SKIN_REDUCTION,
            frenzy_percent_per_stack: Self::DEFAULT_FRENZY_PERCENT,
            frenzy_max_stacks: Self::DEFAULT_FRENZY_MAX_STACKS,
            skirmisher_percent_per_enemy: Self::DEFAULT_SKIRMISHER_PERCENT,
            mana_surge_threshold_percent: Self::DEFAULT_MANA_SURGE_THRESHOLD,
        }
    }

    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns,
            ..Self::new()
        }
    }

    /// Turn ceiling the engine enforces: `max_turns` clamped to
    /// `1..=DEFAULT_MAX_TURNS`, so unvalidated configs still stop in time.
    pub fn turn_limit(&self) -> u32 {
        self.max_turns.clamp(1, Self::DEFAULT_MAX_TURNS)
    }

    /// Checks that every tunable is inside its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        if self.max_turns > Self::DEFAULT_MAX_TURNS {
            return Err(ConfigError::TurnLimitTooHigh {
                value: self.max_turns,
                max: Self::DEFAULT_MAX_TURNS,
            });
        }

        let percents = [
            ("burn_percent_per_stack", self.burn_percent_per_stack),
            ("block_reduction_percent", self.block_reduction_percent),
            ("hard_skin_reduction_percent", self.hard_skin_reduction_percent),
            ("mana_surge_threshold_percent", self.mana_surge_threshold_percent),
        ];
        if let Some((field, value)) = percents.into_iter().find(|(_, v)| *v > 100) {
            return Err(ConfigError::PercentOutOfRange { field, value });
        }

        let durations = [
            ("burn_duration", self.burn_duration),
            ("freeze_duration", self.freeze_duration),
            ("slow_duration", self.slow_duration),
        ];
        if let Some((field, value)) = durations.into_iter().find(|(_, v)| *v <= 0) {
            return Err(ConfigError::NonPositiveDuration { field, value });
        }

        Ok(())
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected combat configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_turns must be at least 1")]
    ZeroTurnLimit,

    #[error("max_turns is {value}, the hard cap is {max}")]
    TurnLimitTooHigh { value: u32, max: u32 },

    #[error("{field} is {value}%, expected 0-100")]
    PercentOutOfRange { field: &'static str, value: u32 },

    #[error("{field} is {value}, effects must last at least one turn")]
    NonPositiveDuration { field: &'static str, value: i32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTurnLimit => "CONFIG_ZERO_TURN_LIMIT",
            Self::TurnLimitTooHigh { .. } => "CONFIG_TURN_LIMIT_TOO_HIGH",
            Self::PercentOutOfRange { .. } => "CONFIG_PERCENT_OUT_OF_RANGE",
            Self::NonPositiveDuration { .. } => "CONFIG_NON_POSITIVE_DURATION",
        }
    }
}
