//! Encounter state machine.
//!
//! ```text
//! Init ─┬─> OpeningStrike ─┐
//!       └──────────────────┴─> TurnStart ─> PlayerAction ─> EnemyAction ─┐
//!                                  ^                                      │
//!                                  └──────────────────────────────────────┘
//! any phase ─> Terminal (player dead, no enemy alive, or turn cap reached)
//! ```
//!
//! Each phase takes the [`Encounter`] accumulator by value and hands it back
//! together with the next phase.

use crate::combat::{
    AttackContext, AttackOptions, AttackResolution, ClassOverrides, Hand, resolve_attack,
};
use crate::config::CombatConfig;
use crate::env::RollStream;
use crate::log::{CombatLog, EffectTag, LogAction, LogEvent, Snapshot};
use crate::state::CombatantState;
use crate::traits::Class;

use super::setup::Hands;
use super::status::StatusEffectProcessor;

/// Orchestrator states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Init,
    OpeningStrike,
    TurnStart,
    PlayerAction,
    EnemyAction,
    Terminal,
}

/// Everything one encounter accumulates between phases.
pub(crate) struct Encounter<'e> {
    pub(crate) turn: u32,
    pub(crate) player: CombatantState,
    pub(crate) enemies: Vec<CombatantState>,
    pub(crate) hands: Hands,
    pub(crate) ranged_opener: bool,
    pub(crate) log: CombatLog,
    pub(crate) rolls: RollStream<'e>,
}

impl Encounter<'_> {
    /// First enemy in original order that is still alive.
    fn first_living_enemy(&self) -> Option<usize> {
        self.enemies.iter().position(CombatantState::is_alive)
    }

    fn any_enemy_alive(&self) -> bool {
        self.first_living_enemy().is_some()
    }

    fn living_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    fn is_over(&self) -> bool {
        !self.player.is_alive() || !self.any_enemy_alive()
    }

    fn class(&self) -> Class {
        self.player.class.unwrap_or_default()
    }

    /// Stamps `events` with the current snapshot and appends them.
    fn record(&mut self, events: impl IntoIterator<Item = LogEvent>) {
        let snapshot = Snapshot::capture(&self.player, &self.enemies);
        for event in events {
            self.log.push(event.stamp(snapshot.clone()));
        }
    }

    /// Resolves one player attack against the enemy at `target`.
    fn player_attack(&mut self, target: usize, options: AttackOptions, config: &CombatConfig) {
        let ctx = AttackContext {
            turn: self.turn,
            enemies: &self.enemies,
            defender_in_group: self.living_enemies() > 1,
            options,
            config,
        };
        let AttackResolution {
            events,
            attacker,
            defender,
        } = resolve_attack(&self.player, &self.enemies[target], &ctx, &mut self.rolls);

        self.player = attacker;
        self.enemies[target] = defender;
        self.record(events);
    }

    /// Resolves one attack from the enemy at `index` against the player.
    fn enemy_attack(&mut self, index: usize, config: &CombatConfig) {
        // Enemies attack without ally awareness.
        let ctx = AttackContext {
            turn: self.turn,
            enemies: &[],
            defender_in_group: false,
            options: AttackOptions::main_hand(),
            config,
        };
        let AttackResolution {
            events,
            attacker,
            defender,
        } = resolve_attack(&self.enemies[index], &self.player, &ctx, &mut self.rolls);

        self.enemies[index] = attacker;
        self.player = defender;
        self.record(events);
    }
}

pub(crate) type Step<'e> = (Phase, Encounter<'e>);

pub(crate) fn init(mut enc: Encounter<'_>) -> Step<'_> {
    let opponents = enc
        .enemies
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let start = LogEvent::new(0, LogAction::FightStart, &enc.player.name, opponents);
    enc.record([start]);

    let next = if enc.is_over() {
        Phase::Terminal
    } else if enc.ranged_opener {
        Phase::OpeningStrike
    } else {
        Phase::TurnStart
    };
    (next, enc)
}

pub(crate) fn opening_strike<'e>(mut enc: Encounter<'e>, config: &CombatConfig) -> Step<'e> {
    if let Some(target) = enc.first_living_enemy() {
        let overrides = enc.class().traits().opening_strike;
        tracing::debug!(class = %enc.class(), ?overrides, "ranged opening strike");
        let options = AttackOptions::main_hand().with_overrides(overrides);
        enc.player_attack(target, options, config);
    }

    let next = if enc.is_over() {
        Phase::Terminal
    } else {
        Phase::TurnStart
    };
    (next, enc)
}

pub(crate) fn turn_start<'e>(mut enc: Encounter<'e>, config: &CombatConfig) -> Step<'e> {
    enc.turn += 1;
    tracing::debug!(turn = enc.turn, "turn start");

    let processor = StatusEffectProcessor::new(config);

    let tick = processor.tick(&enc.player, enc.turn);
    enc.player = tick.combatant;
    enc.record(tick.events);
    if !enc.player.is_alive() {
        return (Phase::Terminal, enc);
    }

    for index in 0..enc.enemies.len() {
        if !enc.enemies[index].is_alive() {
            continue;
        }
        let tick = processor.tick(&enc.enemies[index], enc.turn);
        enc.enemies[index] = tick.combatant;
        enc.record(tick.events);
    }

    let next = if enc.any_enemy_alive() {
        Phase::PlayerAction
    } else {
        Phase::Terminal
    };
    (next, enc)
}

pub(crate) fn player_action<'e>(mut enc: Encounter<'e>, config: &CombatConfig) -> Step<'e> {
    if enc.player.is_frozen() {
        let name = &enc.player.name;
        let skipped = LogEvent::effect(enc.turn, EffectTag::FrozenNoAttack, name, name);
        tracing::debug!(turn = enc.turn, "player frozen, skipping attacks");
        enc.record([skipped]);
        return (Phase::EnemyAction, enc);
    }

    let attacks = enc.player.effective_attacks();
    let turn_opener = enc.class().traits().turn_opener;
    let hands = enc.hands.clone();

    'attacks: for index in 0..attacks {
        for &hand in &hands {
            let Some(target) = enc.first_living_enemy() else {
                break 'attacks;
            };
            let overrides = if index == 0 && hand == Hand::Main {
                turn_opener
            } else {
                ClassOverrides::NONE
            };
            let options = AttackOptions::for_hand(hand).with_overrides(overrides);
            enc.player_attack(target, options, config);
        }
    }

    let next = if enc.any_enemy_alive() {
        Phase::EnemyAction
    } else {
        Phase::Terminal
    };
    (next, enc)
}

pub(crate) fn enemy_action<'e>(mut enc: Encounter<'e>, config: &CombatConfig) -> Step<'e> {
    for index in 0..enc.enemies.len() {
        if !enc.enemies[index].is_alive() {
            continue;
        }

        if enc.enemies[index].is_frozen() {
            let name = &enc.enemies[index].name;
            let skipped = LogEvent::effect(enc.turn, EffectTag::FrozenNoAttack, name, name);
            enc.record([skipped]);
            continue;
        }

        for _ in 0..enc.enemies[index].effective_attacks() {
            enc.enemy_attack(index, config);
            if !enc.player.is_alive() {
                return (Phase::Terminal, enc);
            }
        }
    }

    let next = if enc.turn >= config.turn_limit() {
        tracing::info!(turn = enc.turn, "turn cap reached");
        Phase::Terminal
    } else {
        Phase::TurnStart
    };
    (next, enc)
}

/// Closes the log. Performs no further state changes.
pub(crate) fn terminal(mut enc: Encounter<'_>) -> CombatLog {
    if !enc.any_enemy_alive() {
        let defeated = LogEvent::new(
            enc.turn,
            LogAction::AllEnemiesDefeated,
            &enc.player.name,
            "",
        );
        enc.record([defeated]);
    }
    enc.log.turns = enc.turn;
    enc.log
}
