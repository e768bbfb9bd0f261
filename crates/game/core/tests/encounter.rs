use std::collections::HashSet;

use encounter_core::{
    Class, CombatConfig, CombatLog, CombatStats, DamageRange, EffectTag, EncounterEngine,
    EncounterEnv, EnemySpec, EnemyStatsPatch, Equipment, Hand, ItemCategory, ItemId, ItemTemplate,
    LogAction, Outcome, PcgRng, PlayerSpec, Race, Skills, StatusEffect, StatusEffectKind,
    StatusEffectProcessor, simulate_encounter,
};

fn catalog() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate::new("longbow", ItemCategory::Weapon, true),
        ItemTemplate::new("sword", ItemCategory::Weapon, false),
        ItemTemplate::new("dagger", ItemCategory::Weapon, false),
        ItemTemplate::new("buckler", ItemCategory::Shield, false),
    ]
}

fn run(player: &PlayerSpec, enemies: &[EnemySpec], config: &CombatConfig, seed: u64) -> CombatLog {
    let items = catalog();
    let rng = PcgRng;
    let env = EncounterEnv::from_parts(&items, &rng, config);
    simulate_encounter(player, enemies, &env, seed)
}

fn player(max_health: u32, damage: u32) -> PlayerSpec {
    PlayerSpec::new(
        "Hero",
        CombatStats {
            max_health,
            damage: DamageRange::fixed(damage),
            ..CombatStats::baseline()
        },
    )
    .with_class(Class::Mage)
}

fn enemy(name: &str, max_health: u32, damage: u32) -> EnemySpec {
    EnemySpec::new(
        name,
        EnemyStatsPatch {
            max_health: Some(max_health),
            damage: Some(DamageRange::fixed(damage)),
            ..Default::default()
        },
    )
}

fn actions(log: &CombatLog) -> Vec<(u32, LogAction)> {
    log.iter().map(|e| (e.turn(), e.action())).collect()
}

#[test]
fn basic_one_on_one_kill() {
    let log = run(
        &player(50, 10),
        &[enemy("Goblin", 10, 3)],
        &CombatConfig::default(),
        1,
    );

    assert_eq!(
        actions(&log),
        vec![
            (0, LogAction::FightStart),
            (1, LogAction::Attack),
            (1, LogAction::EnemyDeath),
            (1, LogAction::AllEnemiesDefeated),
        ]
    );
    assert_eq!(log.entries[1].event.damage, Some(10));
    assert_eq!(log.entries[1].event.defender, "Goblin");
    assert_eq!(log.outcome(), Outcome::Victory);
    assert_eq!(log.last_snapshot().map(|s| s.enemies_health), Some(0));
}

#[test]
fn fight_start_carries_full_snapshot() {
    let log = run(
        &player(50, 10),
        &[enemy("Goblin", 30, 3), enemy("Orc", 40, 3)],
        &CombatConfig::default(),
        1,
    );

    let start = &log.entries[0];
    assert_eq!(start.action(), LogAction::FightStart);
    assert_eq!(start.event.attacker, "Hero");
    assert_eq!(start.snapshot.player_health, 50);
    assert_eq!(start.snapshot.enemies_health, 70);
    assert_eq!(start.snapshot.enemies.len(), 2);
}

#[test]
fn ranged_opener_strikes_at_turn_zero() {
    let archer = player(50, 5)
        .with_class(Class::Ranger)
        .with_equipment(Equipment::new(Some(ItemId::new("longbow")), None));
    let log = run(&archer, &[enemy("Goblin", 100, 1)], &CombatConfig::default(), 3);

    assert_eq!(log.entries[1].turn(), 0);
    assert_eq!(log.entries[1].action(), LogAction::Attack);
    assert_eq!(log.entries[1].event.attacker, "Hero");
    assert!(log.entries[2..].iter().all(|e| e.turn() >= 1));
}

#[test]
fn melee_weapon_has_no_opener() {
    let fighter =
        player(50, 5).with_equipment(Equipment::new(Some(ItemId::new("sword")), None));
    let log = run(&fighter, &[enemy("Goblin", 100, 1)], &CombatConfig::default(), 3);

    assert_eq!(log.entries_for_turn(0).count(), 1);
}

#[test]
fn rogue_opener_always_crits() {
    let rogue = player(50, 10)
        .with_class(Class::Rogue)
        .with_equipment(Equipment::new(Some(ItemId::new("longbow")), None));
    let log = run(&rogue, &[enemy("Goblin", 100, 1)], &CombatConfig::default(), 3);

    let opener = &log.entries[1].event;
    assert!(opener.is_crit);
    assert_eq!(opener.damage, Some(15));
}

#[test]
fn burn_kills_before_any_attack() {
    let doomed = player(100, 10)
        .with_health(4)
        .with_status(StatusEffect::new(StatusEffectKind::Burning, 3));
    let log = run(&doomed, &[enemy("Goblin", 100, 1)], &CombatConfig::default(), 9);

    assert_eq!(
        actions(&log),
        vec![
            (0, LogAction::FightStart),
            (1, LogAction::EffectApplied),
            (1, LogAction::Death),
        ]
    );
    assert_eq!(log.entries[1].event.effect, Some(EffectTag::BurningTarget));
    assert_eq!(log.entries[1].event.damage, Some(5));
    assert_eq!(log.entries[1].snapshot.player_health, 0);
    assert_eq!(log.outcome(), Outcome::Defeat);
}

#[test]
fn burning_enemy_is_skipped_as_target() {
    let burning = enemy("Zombie", 100, 1)
        .with_health(3)
        .with_status(StatusEffect::new(StatusEffectKind::Burning, 3));
    let log = run(
        &player(50, 10),
        &[burning, enemy("Rat", 50, 1)],
        &CombatConfig::default(),
        4,
    );

    let first_attack = log
        .iter()
        .find(|e| e.action() == LogAction::Attack)
        .map(|e| e.event.defender.clone());
    assert_eq!(first_attack.as_deref(), Some("Rat"));
}

#[test]
fn stalemate_stops_at_turn_cap() {
    let mut untouchable = player(50, 1);
    untouchable.stats.dodge_chance = 100;
    let ghost = EnemySpec::new(
        "Ghost",
        EnemyStatsPatch {
            max_health: Some(50),
            dodge_chance: Some(100),
            ..Default::default()
        },
    );
    let log = run(&untouchable, &[ghost], &CombatConfig::default(), 5);

    assert_eq!(log.turns, CombatConfig::DEFAULT_MAX_TURNS);
    assert_eq!(log.outcome(), Outcome::Undecided);
    assert!(log.iter().all(|e| e.action() != LogAction::AllEnemiesDefeated));
}

#[test]
fn configured_turn_cap_is_respected() {
    let config = CombatConfig::with_max_turns(5);
    let log = run(&player(1_000, 1), &[enemy("Golem", 1_000, 1)], &config, 5);

    assert_eq!(log.turns, 5);
    assert!(log.iter().all(|e| e.turn() <= 5));
}

#[test]
fn unvalidated_turn_limit_is_capped_at_hundred() {
    let config = CombatConfig::with_max_turns(500);
    let log = run(
        &player(10_000, 1),
        &[enemy("Golem", 10_000, 1)],
        &config,
        5,
    );

    assert_eq!(log.turns, CombatConfig::DEFAULT_MAX_TURNS);
    assert_eq!(log.outcome(), Outcome::Undecided);
}

#[test]
fn every_encounter_terminates_with_a_log() {
    let config = CombatConfig::default();
    for seed in 0..50 {
        let mut hero = player(80, 0);
        hero.stats.damage = DamageRange::new(2, 12);
        hero.stats.dodge_chance = 20;
        hero.stats.crit_chance = 25;
        let enemies = [
            EnemySpec::new(
                "Wolf",
                EnemyStatsPatch {
                    max_health: Some(30),
                    damage: Some(DamageRange::new(1, 6)),
                    dodge_chance: Some(15),
                    ..Default::default()
                },
            ),
            enemy("Wolf", 25, 4),
        ];

        let log = run(&hero, &enemies, &config, seed);
        assert!(!log.is_empty());
        assert!(log.turns <= config.max_turns);
        assert_ne!(log.outcome(), Outcome::Undecided, "seed {seed}");
    }
}

#[test]
fn health_never_rises_without_healing_and_stays_in_bounds() {
    let mut hero = player(60, 0);
    hero.stats.damage = DamageRange::new(3, 9);
    hero.stats.attacks_per_round = 2;
    hero.stats.burn_chance = 30;
    let enemies = [enemy("Orc", 40, 5), enemy("Orc", 40, 5)];

    for seed in 0..20 {
        let log = run(&hero, &enemies, &CombatConfig::default(), seed);
        let mut previous: Option<&encounter_core::Snapshot> = None;
        for entry in &log {
            let snapshot = &entry.snapshot;
            assert!(snapshot.player_health <= snapshot.player_max_health);
            for e in &snapshot.enemies {
                assert!(e.current_health <= e.max_health);
            }
            if let Some(prev) = previous {
                assert!(snapshot.player_health <= prev.player_health);
                for (now, before) in snapshot.enemies.iter().zip(&prev.enemies) {
                    assert!(now.current_health <= before.current_health);
                }
            }
            previous = Some(snapshot);
        }
    }
}

#[test]
fn dead_combatants_never_act_or_get_targeted() {
    let mut hero = player(200, 0);
    hero.stats.damage = DamageRange::new(5, 20);
    hero.stats.attacks_per_round = 3;
    let enemies = [
        enemy("Goblin", 15, 2),
        enemy("Goblin", 15, 2),
        enemy("Troll", 60, 6),
    ];

    for seed in 0..20 {
        let log = run(&hero, &enemies, &CombatConfig::default(), seed);
        let mut dead: HashSet<&str> = HashSet::new();
        for entry in &log {
            let event = &entry.event;
            if event.action == LogAction::AllEnemiesDefeated {
                continue;
            }
            assert!(!dead.contains(event.attacker.as_str()), "{event:?}");
            assert!(!dead.contains(event.defender.as_str()), "{event:?}");
            if event.action.is_death() {
                dead.insert(event.defender.as_str());
            }
        }
    }
}

#[test]
fn duplicate_enemy_names_are_numbered() {
    let log = run(
        &player(50, 1),
        &[enemy("Goblin", 5, 1), enemy("Orc", 5, 1), enemy("Goblin", 5, 1)],
        &CombatConfig::with_max_turns(1),
        1,
    );

    let names: Vec<_> = log.entries[0]
        .snapshot
        .enemies
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Goblin 1", "Orc", "Goblin 2"]);
}

#[test]
fn multi_attack_retargets_and_stops_when_nobody_is_left() {
    let mut hero = player(50, 10);
    hero.stats.attacks_per_round = 5;
    let log = run(
        &hero,
        &[enemy("Goblin", 10, 1), enemy("Goblin", 10, 1)],
        &CombatConfig::default(),
        1,
    );

    assert_eq!(
        actions(&log),
        vec![
            (0, LogAction::FightStart),
            (1, LogAction::Attack),
            (1, LogAction::EnemyDeath),
            (1, LogAction::Attack),
            (1, LogAction::EnemyDeath),
            (1, LogAction::AllEnemiesDefeated),
        ]
    );
    assert_eq!(log.entries[1].event.defender, "Goblin 1");
    assert_eq!(log.entries[3].event.defender, "Goblin 2");
}

fn off_hand_swings(spec: &PlayerSpec) -> usize {
    let log = run(
        spec,
        &[enemy("Golem", 500, 1)],
        &CombatConfig::with_max_turns(3),
        2,
    );
    log.iter()
        .filter(|e| e.event.hand == Some(Hand::Off))
        .count()
}

#[test]
fn dual_wield_needs_skill_item_and_weapon() {
    let armed = player(500, 4)
        .with_skills(Skills::DUAL_WIELD)
        .with_equipment(Equipment::new(
            Some(ItemId::new("sword")),
            Some(ItemId::new("dagger")),
        ));
    assert_eq!(off_hand_swings(&armed), 3);

    let unskilled = armed.clone().with_skills(Skills::empty());
    assert_eq!(off_hand_swings(&unskilled), 0);

    let shield = armed.clone().with_equipment(Equipment::new(
        Some(ItemId::new("sword")),
        Some(ItemId::new("buckler")),
    ));
    assert_eq!(off_hand_swings(&shield), 0);

    let empty_hand = armed
        .clone()
        .with_equipment(Equipment::new(Some(ItemId::new("sword")), None));
    assert_eq!(off_hand_swings(&empty_hand), 0);

    let unknown = armed.with_equipment(Equipment::new(
        Some(ItemId::new("sword")),
        Some(ItemId::new("mystery")),
    ));
    assert_eq!(off_hand_swings(&unknown), 0);
}

#[test]
fn status_decays_after_duration_or_half_for_dwarves() {
    let config = CombatConfig::default();
    let processor = StatusEffectProcessor::new(&config);
    let base = encounter_core::CombatantState {
        id: encounter_core::CombatantId::PLAYER,
        name: "Hero".into(),
        side: encounter_core::Side::Player,
        race: Some(Race::Human),
        class: None,
        skills: Skills::empty(),
        stats: CombatStats {
            max_health: 100,
            ..CombatStats::baseline()
        },
        current_health: 100,
        current_mana: 0,
        status_effects: encounter_core::StatusEffects::empty(),
        flags: encounter_core::AbilityFlags::default(),
    };

    for duration in 1..=7 {
        for (race, expected) in [(Race::Human, duration), (Race::Dwarf, (duration + 1) / 2)] {
            let mut combatant = base.clone();
            combatant.race = Some(race);
            combatant
                .status_effects
                .add(StatusEffect::new(StatusEffectKind::Frozen, duration));

            let mut ticks = 0;
            while combatant.is_frozen() {
                combatant = processor.tick(&combatant, ticks as u32 + 1).combatant;
                ticks += 1;
            }
            assert_eq!(ticks, expected, "{race} with duration {duration}");
        }
    }
}

#[test]
fn frozen_player_skips_attacks() {
    let frozen = player(500, 5).with_status(StatusEffect::new(StatusEffectKind::Frozen, 4));
    let log = run(
        &frozen,
        &[enemy("Golem", 500, 1)],
        &CombatConfig::with_max_turns(6),
        1,
    );

    let skipped: Vec<u32> = log
        .iter()
        .filter(|e| e.event.effect == Some(EffectTag::FrozenNoAttack))
        .map(|e| e.turn())
        .collect();
    assert_eq!(skipped, vec![1, 2, 3]);
    assert!(
        log.entries_for_turn(4)
            .any(|e| e.action() == LogAction::Attack && e.event.attacker == "Hero")
    );
}

#[test]
fn frozen_dwarf_recovers_sooner() {
    let frozen = player(500, 5)
        .with_race(Race::Dwarf)
        .with_status(StatusEffect::new(StatusEffectKind::Frozen, 4));
    let log = run(
        &frozen,
        &[enemy("Golem", 500, 1)],
        &CombatConfig::with_max_turns(6),
        1,
    );

    let skipped = log
        .iter()
        .filter(|e| e.event.effect == Some(EffectTag::FrozenNoAttack))
        .count();
    assert_eq!(skipped, 1);
}

#[test]
fn same_seed_same_log() {
    let mut hero = player(80, 0);
    hero.stats.damage = DamageRange::new(1, 15);
    hero.stats.crit_chance = 40;
    hero.stats.dodge_chance = 30;
    hero.stats.freeze_chance = 20;
    let enemies = [enemy("Bandit", 40, 7), enemy("Bandit", 40, 7)];
    let config = CombatConfig::default();

    let first = run(&hero, &enemies, &config, 1234);
    let second = run(&hero, &enemies, &config, 1234);
    assert_eq!(first, second);
}

#[test]
fn engine_reuses_env_across_encounters() {
    let items = catalog();
    let rng = PcgRng;
    let config = CombatConfig::default();
    let engine = EncounterEngine::new(EncounterEnv::from_parts(&items, &rng, &config));

    let hero = player(50, 10);
    let enemies = [enemy("Goblin", 10, 1)];
    let a = engine.simulate(&hero, &enemies, 1);
    let b = engine.simulate(&hero, &enemies, 1);
    assert_eq!(a, b);
    assert_eq!(hero.current_health, None);
}

#[test]
fn enemies_never_steal_or_cast() {
    let mut hero = player(300, 2);
    hero.stats.max_mana = 50;
    let enemies = [EnemySpec::new(
        "Shaman",
        EnemyStatsPatch {
            max_health: Some(200),
            max_mana: Some(50),
            damage: Some(DamageRange::new(2, 6)),
            burn_chance: Some(100),
            ..Default::default()
        },
    )];

    let log = run(&hero, &enemies, &CombatConfig::with_max_turns(10), 8);
    let enemy_strikes: Vec<_> = log
        .iter()
        .filter(|e| e.event.attacker == "Shaman" && e.action().is_strike())
        .collect();

    assert!(!enemy_strikes.is_empty());
    for entry in &enemy_strikes {
        assert_eq!(entry.action(), LogAction::Attack);
        assert_eq!(entry.event.health_gained, None);
        assert_eq!(entry.event.mana_gained, None);
    }
    // on-hit procs still land on the player
    assert!(
        log.iter()
            .any(|e| e.event.effect == Some(EffectTag::IgnitedTarget) && e.event.defender == "Hero")
    );
}

#[test]
fn player_life_steal_heals_during_fight() {
    let mut hero = player(100, 10).with_health(50);
    hero.stats.life_steal_percent = 50;
    let log = run(&hero, &[enemy("Rat", 30, 1)], &CombatConfig::default(), 1);

    let first_hit = log
        .iter()
        .find(|e| e.action() == LogAction::Attack)
        .map(|e| (e.event.health_gained, e.snapshot.player_health));
    assert_eq!(first_hit, Some((Some(5), 55)));
}
