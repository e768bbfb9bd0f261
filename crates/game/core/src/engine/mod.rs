//! Encounter orchestration.
//!
//! The [`EncounterEngine`] drives one encounter from initial specs to a
//! finished [`CombatLog`]. It owns nothing between calls: every simulation
//! builds private combatant state, runs the phase machine in [`phase`] and
//! returns the log. Given the same specs, env and seed it produces the same
//! log.

mod phase;
mod setup;
mod status;

pub use phase::Phase;
pub use setup::disambiguate_names;
pub use status::{StatusEffectProcessor, StatusTick};

use crate::env::{EncounterEnv, RollStream};
use crate::log::CombatLog;
use crate::state::{EnemySpec, PlayerSpec};

use phase::Encounter;

/// Runs encounters against a fixed environment.
#[derive(Clone, Copy, Debug)]
pub struct EncounterEngine<'a> {
    env: EncounterEnv<'a>,
}

impl<'a> EncounterEngine<'a> {
    pub fn new(env: EncounterEnv<'a>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &EncounterEnv<'a> {
        &self.env
    }

    /// Simulates one encounter. Caller-owned specs are never mutated.
    pub fn simulate(&self, player: &PlayerSpec, enemies: &[EnemySpec], seed: u64) -> CombatLog {
        let config = self.env.config();
        let span = tracing::debug_span!(
            "encounter",
            player = %player.name,
            enemies = enemies.len(),
            seed
        );
        let _guard = span.enter();

        let mut encounter = Encounter {
            turn: 0,
            player: setup::player_state(player),
            enemies: setup::enemy_states(enemies, &player.name),
            hands: setup::player_hands(player, &self.env),
            ranged_opener: setup::has_ranged_opener(player, &self.env),
            log: CombatLog::new(player.name.clone(), seed),
            rolls: RollStream::new(self.env.rng(), seed),
        };

        let mut current = Phase::Init;
        loop {
            tracing::trace!(phase = %current, turn = encounter.turn, "phase");
            (current, encounter) = match current {
                Phase::Init => phase::init(encounter),
                Phase::OpeningStrike => phase::opening_strike(encounter, config),
                Phase::TurnStart => phase::turn_start(encounter, config),
                Phase::PlayerAction => phase::player_action(encounter, config),
                Phase::EnemyAction => phase::enemy_action(encounter, config),
                Phase::Terminal => break,
            };
        }

        let draws = encounter.rolls.draws();
        let log = phase::terminal(encounter);
        let outcome = log.outcome();
        tracing::info!(
            turns = log.turns,
            entries = log.len(),
            draws,
            %outcome,
            "encounter finished"
        );
        log
    }
}

/// Simulates one encounter with `env`. Shorthand for
/// [`EncounterEngine::simulate`].
pub fn simulate_encounter(
    player: &PlayerSpec,
    enemies: &[EnemySpec],
    env: &EncounterEnv<'_>,
    seed: u64,
) -> CombatLog {
    EncounterEngine::new(*env).simulate(player, enemies, seed)
}
