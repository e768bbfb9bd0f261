//! Single-attack resolution.
//!
//! [`resolve_attack`] turns one attacker/defender pair into log events and
//! updated copies of both combatants. It never touches any other state; the
//! orchestrator writes the returned combatants back.
//!
//! # Roll order
//!
//! Rolls are drawn in a fixed order so a seed reproduces the same log:
//!
//! 1. dodge (skipped by `ignore_dodge`)
//! 2. crit (skipped by `force_crit`)
//! 3. magic branch
//! 4. damage
//! 5. block
//! 6. on-hit procs: burn, freeze, slow (only while the defender lives)

use crate::config::CombatConfig;
use crate::env::{RollContext, RollStream};
use crate::log::{EffectTag, LogAction, LogEvent};
use crate::state::{
    CombatStats, CombatantState, DamageRange, MagicAttack, Skills, StatusEffect, StatusEffectKind,
};

use super::damage::{
    apply_bonus, apply_crit, effective_armor, floor_damage, mitigate_magic, mitigate_physical,
    reduce_by_percent, scale,
};
use super::hit::{block_chance, crit_chance, dodge_chance};
use super::options::{AttackOptions, Hand};

/// Everything a single attack may read besides the two combatants.
#[derive(Clone, Copy, Debug)]
pub struct AttackContext<'a> {
    pub turn: u32,
    /// All enemy states, for abilities that care about the defender's group.
    /// Empty when an enemy attacks the player.
    pub enemies: &'a [CombatantState],
    /// Whether the defender is one of several enemies.
    pub defender_in_group: bool,
    pub options: AttackOptions,
    pub config: &'a CombatConfig,
}

/// Outcome of one resolver call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackResolution {
    pub events: Vec<LogEvent>,
    pub attacker: CombatantState,
    pub defender: CombatantState,
}

impl AttackResolution {
    pub fn defender_died(&self) -> bool {
        !self.defender.is_alive()
    }
}

/// Resolves one attack from `attacker` against a living `defender`.
pub fn resolve_attack(
    attacker: &CombatantState,
    defender: &CombatantState,
    ctx: &AttackContext<'_>,
    rolls: &mut RollStream<'_>,
) -> AttackResolution {
    debug_assert!(
        defender.is_alive(),
        "{} attacked dead target {}",
        attacker.name,
        defender.name
    );

    let mut attacker = attacker.clone();
    let mut defender = defender.clone();
    let mut events = Vec::new();
    let config = ctx.config;
    let hand = ctx.options.hand();
    let actor = attacker.id;

    // 1. Avoidance
    if !ctx.options.ignore_dodge()
        && rolls.chance(actor, RollContext::Dodge, dodge_chance(&defender))
    {
        attacker.flags.frenzy_stacks = 0;
        events.push(
            LogEvent::new(ctx.turn, LogAction::Dodge, &attacker.name, &defender.name)
                .with_hand(hand),
        );
        return AttackResolution {
            events,
            attacker,
            defender,
        };
    }

    // 2. Critical hit
    let is_crit =
        ctx.options.force_crit() || rolls.chance(actor, RollContext::Crit, crit_chance(&attacker));

    // 3. Magic branch (falls back to a physical attack without mana)
    let magic = choose_magic(&mut attacker, rolls);

    // 4. Damage
    let mitigated = match magic {
        Some(spell) => {
            let roll = roll_range(rolls, &attacker, spell.damage);
            mitigate_magic(roll, defender.stats.magic_resistance)
        }
        None => {
            let roll = roll_range(rolls, &attacker, hand_damage(&attacker.stats, hand));
            mitigate_physical(roll, effective_armor(&defender.stats, &attacker.stats))
        }
    };
    let mut damage = if is_crit {
        apply_crit(mitigated, attacker.stats.crit_damage)
    } else {
        mitigated
    };
    damage = apply_bonus(damage, skill_bonus_percent(&attacker, &defender, ctx));

    let mut blocked = 0;
    if rolls.chance(actor, RollContext::Block, block_chance(&defender)) {
        (damage, blocked) = reduce_by_percent(damage, config.block_reduction_percent);
    }

    let mut absorbed = 0;
    if defender.has_skill(Skills::HARD_SKIN) && !defender.flags.hard_skin_used {
        (damage, absorbed) = reduce_by_percent(damage, config.hard_skin_reduction_percent);
        defender.flags.hard_skin_used = true;
    }

    let damage = floor_damage(damage);
    let dealt = damage.min(defender.current_health);

    // 5. Secondary effects
    let health_gained = attacker.heal(
        scale(dealt, attacker.stats.life_steal_percent)
            .saturating_add(attacker.stats.life_steal_flat),
    );
    let mana_gained = attacker.restore_mana(
        scale(dealt, attacker.stats.mana_steal_percent)
            .saturating_add(attacker.stats.mana_steal_flat),
    );

    if attacker.has_skill(Skills::FRENZY) {
        attacker.flags.frenzy_stacks =
            (attacker.flags.frenzy_stacks + 1).min(config.frenzy_max_stacks);
    }

    // 6. Apply
    defender.take_damage(damage);

    let action = if magic.is_some() {
        LogAction::MagicAttack
    } else {
        LogAction::Attack
    };
    let mut event = LogEvent::new(ctx.turn, action, &attacker.name, &defender.name)
        .with_hand(hand)
        .with_damage(damage)
        .with_crit(is_crit)
        .with_health_gained(health_gained)
        .with_mana_gained(mana_gained)
        .with_damage_reduced(blocked);
    if let Some(spell) = magic {
        event = event.with_element(spell.element);
    }
    events.push(event);

    if absorbed > 0 {
        events.push(
            LogEvent::effect(ctx.turn, EffectTag::HardSkin, &attacker.name, &defender.name)
                .with_damage_reduced(absorbed),
        );
    }

    if defender.is_alive() {
        apply_procs(&attacker, &mut defender, ctx, rolls, &mut events);
    } else {
        events.push(LogEvent::new(
            ctx.turn,
            LogAction::death_of(defender.is_player()),
            &attacker.name,
            &defender.name,
        ));
    }

    AttackResolution {
        events,
        attacker,
        defender,
    }
}

fn choose_magic(attacker: &mut CombatantState, rolls: &mut RollStream<'_>) -> Option<MagicAttack> {
    let spell = attacker.stats.magic_attack?;
    if !rolls.chance(attacker.id, RollContext::MagicBranch, spell.chance) {
        return None;
    }
    if attacker.try_spend_mana(spell.mana_cost) {
        Some(spell)
    } else {
        tracing::debug!(
            attacker = %attacker.name,
            mana = attacker.current_mana,
            cost = spell.mana_cost,
            "not enough mana for magic attack, attacking physically"
        );
        None
    }
}

fn hand_damage(stats: &CombatStats, hand: Hand) -> DamageRange {
    match hand {
        Hand::Main => stats.damage,
        Hand::Off => stats.off_hand_damage.unwrap_or(stats.damage),
    }
}

fn roll_range(rolls: &mut RollStream<'_>, attacker: &CombatantState, range: DamageRange) -> u32 {
    rolls.range(attacker.id, RollContext::Damage, range.min, range.max)
}

/// Bonus damage percent from escalating and group-aware skills.
fn skill_bonus_percent(
    attacker: &CombatantState,
    defender: &CombatantState,
    ctx: &AttackContext<'_>,
) -> u32 {
    let mut bonus: u32 = 0;

    if attacker.has_skill(Skills::FRENZY) {
        bonus = attacker
            .flags
            .frenzy_stacks
            .saturating_mul(ctx.config.frenzy_percent_per_stack);
    }

    if attacker.has_skill(Skills::SKIRMISHER) && ctx.defender_in_group {
        let others = ctx
            .enemies
            .iter()
            .filter(|e| e.is_alive() && e.id != defender.id)
            .count() as u32;
        let per_enemy = ctx.config.skirmisher_percent_per_enemy;
        bonus = bonus.saturating_add(others.saturating_mul(per_enemy));
    }

    bonus
}

fn apply_procs(
    attacker: &CombatantState,
    defender: &mut CombatantState,
    ctx: &AttackContext<'_>,
    rolls: &mut RollStream<'_>,
    events: &mut Vec<LogEvent>,
) {
    let config = ctx.config;
    let procs = [
        (
            RollContext::Burn,
            attacker.stats.burn_chance,
            StatusEffectKind::Burning,
            config.burn_duration,
            EffectTag::IgnitedTarget,
        ),
        (
            RollContext::Freeze,
            attacker.stats.freeze_chance,
            StatusEffectKind::Frozen,
            config.freeze_duration,
            EffectTag::FrozenTarget,
        ),
        (
            RollContext::Slow,
            attacker.stats.slow_chance,
            StatusEffectKind::ReducedAttacks,
            config.slow_duration,
            EffectTag::SlowedTarget,
        ),
    ];

    for (context, chance, kind, duration, tag) in procs {
        if rolls.chance(attacker.id, context, chance) {
            defender.status_effects.add(StatusEffect::new(kind, duration));
            events.push(LogEvent::effect(ctx.turn, tag, &attacker.name, &defender.name));
        }
    }
}
