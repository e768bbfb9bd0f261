//! Init phase helpers: name disambiguation and state construction.

use std::collections::{HashMap, HashSet};

use arrayvec::ArrayVec;

use crate::combat::Hand;
use crate::config::CombatConfig;
use crate::env::EncounterEnv;
use crate::state::{
    AbilityFlags, CombatantId, CombatantState, EnemySpec, PlayerSpec, Side, Skills, StatusEffects,
};

/// Hands used per attack index, main hand first.
pub(crate) type Hands = ArrayVec<Hand, { CombatConfig::MAX_HANDS }>;

/// Assigns display names to enemies.
///
/// Base names that occur more than once get an ordinal suffix in array order
/// (`"Goblin 1"`, `"Goblin 2"`). A name shared with the player counts as a
/// duplicate so that name-based ownership stays unambiguous. Unique names are
/// kept as they are. An ordinal that would collide with the player's name or
/// with any other enemy name is skipped, so every result is distinct.
pub fn disambiguate_names<'n>(
    names: impl IntoIterator<Item = &'n str> + Clone,
    player_name: &str,
) -> Vec<String> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for name in names.clone() {
        *frequency.entry(name).or_default() += 1;
    }
    let is_duplicated = |name: &str| frequency[name] > 1 || name == player_name;

    let mut taken: HashSet<String> = names
        .clone()
        .into_iter()
        .filter(|name| !is_duplicated(*name))
        .map(str::to_owned)
        .collect();
    taken.insert(player_name.to_owned());

    let mut ordinals: HashMap<&str, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            if !is_duplicated(name) {
                return name.to_owned();
            }
            let ordinal = ordinals.entry(name).or_default();
            loop {
                *ordinal += 1;
                let candidate = format!("{name} {ordinal}");
                if taken.insert(candidate.clone()) {
                    return candidate;
                }
            }
        })
        .collect()
}

pub(crate) fn player_state(spec: &PlayerSpec) -> CombatantState {
    let stats = spec.stats.clone().sanitized();
    CombatantState {
        id: CombatantId::PLAYER,
        name: spec.name.clone(),
        side: Side::Player,
        race: Some(spec.race),
        class: Some(spec.class),
        skills: spec.skills,
        current_health: spec
            .current_health
            .unwrap_or(stats.max_health)
            .min(stats.max_health),
        current_mana: spec
            .current_mana
            .unwrap_or(stats.max_mana)
            .min(stats.max_mana),
        stats,
        status_effects: StatusEffects::from_effects(spec.status_effects.iter().copied()),
        flags: AbilityFlags::default(),
    }
}

pub(crate) fn enemy_states(specs: &[EnemySpec], player_name: &str) -> Vec<CombatantState> {
    let names = disambiguate_names(specs.iter().map(|s| s.name.as_str()), player_name);

    specs
        .iter()
        .zip(names)
        .enumerate()
        .map(|(index, (spec, name))| {
            let stats = spec.stats.resolve();
            CombatantState {
                id: CombatantId::enemy(index),
                name,
                side: Side::Enemy,
                race: spec.race,
                class: None,
                skills: Skills::empty(),
                current_health: spec
                    .current_health
                    .unwrap_or(stats.max_health)
                    .min(stats.max_health),
                current_mana: stats.max_mana,
                stats,
                status_effects: StatusEffects::from_effects(spec.status_effects.iter().copied()),
                flags: AbilityFlags::default(),
            }
        })
        .collect()
}

/// Whether the player's main-hand item grants a ranged opening strike.
pub(crate) fn has_ranged_opener(spec: &PlayerSpec, env: &EncounterEnv<'_>) -> bool {
    spec.equipment
        .main_hand
        .as_ref()
        .and_then(|id| env.item(id))
        .is_some_and(|template| template.ranged)
}

/// Hands the player swings with every attack index.
///
/// The off hand joins only with the dual-wield skill, an off-hand item, and
/// that item being a weapon.
pub(crate) fn player_hands(spec: &PlayerSpec, env: &EncounterEnv<'_>) -> Hands {
    let mut hands = ArrayVec::new();
    hands.push(Hand::Main);

    let off_hand_weapon = spec
        .equipment
        .off_hand
        .as_ref()
        .and_then(|id| env.item(id))
        .is_some_and(|template| template.is_weapon());
    if spec.skills.contains(Skills::DUAL_WIELD) && off_hand_weapon {
        hands.push(Hand::Off);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CombatStats, EnemyStatsPatch, StatusEffect, StatusEffectKind};

    #[test]
    fn unique_names_are_untouched() {
        let names = disambiguate_names(["Goblin", "Orc"], "Hero");
        assert_eq!(names, vec!["Goblin", "Orc"]);
    }

    #[test]
    fn duplicates_get_ordinals_in_array_order() {
        let names = disambiguate_names(["Goblin", "Orc", "Goblin", "Goblin"], "Hero");
        assert_eq!(names, vec!["Goblin 1", "Orc", "Goblin 2", "Goblin 3"]);
    }

    #[test]
    fn name_shared_with_player_is_suffixed() {
        let names = disambiguate_names(["Hero", "Rat"], "Hero");
        assert_eq!(names, vec!["Hero 1", "Rat"]);
    }

    #[test]
    fn ordinals_skip_the_player_name() {
        let names = disambiguate_names(["Goblin", "Goblin"], "Goblin 1");
        assert_eq!(names, vec!["Goblin 2", "Goblin 3"]);
    }

    #[test]
    fn ordinals_skip_names_already_in_the_group() {
        let names = disambiguate_names(["Goblin", "Goblin", "Goblin 1"], "Hero");
        assert_eq!(names, vec!["Goblin 2", "Goblin 3", "Goblin 1"]);

        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn player_state_clamps_starting_values() {
        let stats = CombatStats {
            max_health: 40,
            max_mana: 10,
            ..CombatStats::baseline()
        };
        let spec = PlayerSpec::new("Hero", stats)
            .with_health(90)
            .with_mana(3)
            .with_status(StatusEffect::new(StatusEffectKind::Burning, 2));

        let state = player_state(&spec);
        assert_eq!(state.current_health, 40);
        assert_eq!(state.current_mana, 3);
        assert!(state.status_effects.has(StatusEffectKind::Burning));
        assert!(state.is_player());
    }

    #[test]
    fn enemies_default_to_full_health_and_no_skills() {
        let patch = EnemyStatsPatch {
            max_health: Some(12),
            ..Default::default()
        };
        let states = enemy_states(&[EnemySpec::new("Rat", patch)], "Hero");
        assert_eq!(states[0].current_health, 12);
        assert_eq!(states[0].id, CombatantId::enemy(0));
        assert!(states[0].skills.is_empty());
        assert_eq!(states[0].class, None);
    }
}
