//! Status effect system for combatants.
//!
//! Status effects are timed modifiers that deal damage over time, suppress
//! attacks or reduce the attack count.
//!
//! # Turn-based Duration
//!
//! Effects store the remaining `duration` in turns. The status processor
//! decays every duration once per turn (twice for resistant races) and drops
//! effects whose duration reaches zero or below.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;

/// Active status effects on a combatant, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

/// A single status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusEffectKind,
    /// Remaining turns.
    pub duration: i32,
    /// Stack count or magnitude.
    #[cfg_attr(feature = "serde", serde(default = "StatusEffect::default_amount"))]
    pub amount: u32,
}

impl StatusEffect {
    pub const fn new(kind: StatusEffectKind, duration: i32) -> Self {
        Self {
            kind,
            duration,
            amount: 1,
        }
    }

    pub const fn stacked(kind: StatusEffectKind, duration: i32, amount: u32) -> Self {
        Self {
            kind,
            duration,
            amount,
        }
    }

    #[cfg(feature = "serde")]
    fn default_amount() -> u32 {
        1
    }
}

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusEffectKind {
    /// Fire damage over time, per stack.
    Burning,

    /// Cannot attack while active.
    Frozen,

    /// Each stack removes one attack per turn (minimum one attack).
    ReducedAttacks,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Builds a set from a list, merging repeated kinds.
    pub fn from_effects(effects: impl IntoIterator<Item = StatusEffect>) -> Self {
        let mut set = Self::empty();
        for effect in effects {
            set.add(effect);
        }
        set
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == kind && e.duration > 0)
    }

    /// Total stacks of a kind across active entries.
    pub fn stacks(&self, kind: StatusEffectKind) -> u32 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind && e.duration > 0)
            .fold(0u32, |total, e| total.saturating_add(e.amount))
    }

    /// Remaining duration of a kind, if active.
    pub fn duration(&self, kind: StatusEffectKind) -> Option<i32> {
        self.effects
            .iter()
            .find(|e| e.kind == kind && e.duration > 0)
            .map(|e| e.duration)
    }

    /// Adds a status effect.
    ///
    /// If the kind is already present, its amount stacks and the longer
    /// duration wins. New kinds are dropped once the set is full.
    pub fn add(&mut self, effect: StatusEffect) {
        if effect.duration <= 0 {
            return;
        }

        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            existing.amount = existing.amount.saturating_add(effect.amount);
            existing.duration = existing.duration.max(effect.duration);
            return;
        }

        if self.effects.try_push(effect).is_err() {
            tracing::warn!(kind = %effect.kind, "status effect set full, dropping effect");
        }
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, kind: StatusEffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Shortens every duration by `amount` and drops effects at or below zero.
    pub fn decay(&mut self, amount: i32) {
        for effect in self.effects.iter_mut() {
            effect.duration -= amount;
        }
        self.effects.retain(|e| e.duration > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }
}
