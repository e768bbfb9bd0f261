//! Start-of-turn status processing.
//!
//! Per combatant, in order: burn damage, mana regeneration, mana surge, and
//! duration decay. Frozen and reduced-attacks effects deal nothing here; the
//! action phases read them.

use crate::combat::damage::scale;
use crate::config::CombatConfig;
use crate::log::{EffectTag, LogAction, LogEvent};
use crate::state::{CombatantState, Skills, StatusEffectKind};

/// Result of ticking one combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusTick {
    pub events: Vec<LogEvent>,
    pub combatant: CombatantState,
}

/// Applies recurring effects at the start of a turn.
#[derive(Clone, Copy, Debug)]
pub struct StatusEffectProcessor<'a> {
    config: &'a CombatConfig,
}

impl<'a> StatusEffectProcessor<'a> {
    pub fn new(config: &'a CombatConfig) -> Self {
        Self { config }
    }

    /// Burn damage for the combatant's current stacks.
    pub fn burn_damage(&self, combatant: &CombatantState) -> u32 {
        let stacks = combatant.status_effects.stacks(StatusEffectKind::Burning);
        scale(combatant.stats.max_health, self.config.burn_percent_per_stack)
            .saturating_mul(stacks)
    }

    /// Ticks one living combatant and returns its updated copy.
    pub fn tick(&self, combatant: &CombatantState, turn: u32) -> StatusTick {
        let mut combatant = combatant.clone();
        let mut events = Vec::new();
        let name = combatant.name.clone();

        let burn = self.burn_damage(&combatant);
        if burn > 0 {
            combatant.take_damage(burn);
            events.push(
                LogEvent::effect(turn, EffectTag::BurningTarget, &name, &name).with_damage(burn),
            );
            if !combatant.is_alive() {
                tracing::debug!(combatant = %name, turn, "burned to death");
                events.push(LogEvent::new(
                    turn,
                    LogAction::death_of(combatant.is_player()),
                    &name,
                    &name,
                ));
                return StatusTick { events, combatant };
            }
        }

        combatant.restore_mana(combatant.stats.mana_regen);

        if let Some(surge) = self.mana_surge(&mut combatant) {
            events.push(
                LogEvent::effect(turn, EffectTag::ManaSurge, &name, &name).with_mana_gained(surge),
            );
        }

        combatant
            .status_effects
            .decay(combatant.race_traits().status_decay);

        StatusTick { events, combatant }
    }

    /// Refills mana once per encounter when it has run low.
    fn mana_surge(&self, combatant: &mut CombatantState) -> Option<u32> {
        if !combatant.has_skill(Skills::MANA_SURGE)
            || combatant.flags.mana_surge_used
            || combatant.stats.max_mana == 0
        {
            return None;
        }
        let threshold = scale(
            combatant.stats.max_mana,
            self.config.mana_surge_threshold_percent,
        );
        if combatant.current_mana > threshold {
            return None;
        }
        combatant.flags.mana_surge_used = true;
        Some(combatant.restore_mana(combatant.stats.max_mana))
    }
}
