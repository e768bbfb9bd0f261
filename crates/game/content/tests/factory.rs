use std::fs;
use std::path::PathBuf;

use encounter_content::ContentFactory;
use encounter_core::{EncounterEnv, ItemId, ItemOracle, LogAction, PcgRng, simulate_encounter};

fn shipped_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

#[test]
fn loads_content_from_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("scenarios")).unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r#"(items: [(id: "sling", category: Weapon, ranged: true)])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("enemies.ron"),
        r#"[("bat", (name: "Bat", stats: (max_health: Some(4))))]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("scenarios/cave.ron"),
        r#"(
            player: (
                name: "Pip",
                stats: (max_health: 20, damage: (min: 5, max: 5)),
                equipment: (main_hand: Some("sling")),
            ),
            enemies: [Bestiary("bat"), Bestiary("bat")],
        )"#,
    )
    .unwrap();
    fs::write(dir.path().join("scenarios/notes.txt"), "not a scenario").unwrap();

    let factory = ContentFactory::new(dir.path());
    let config = factory.load_config().unwrap();
    let items = factory.load_items().unwrap();
    let bestiary = factory.load_bestiary().unwrap();
    let scenario = factory.load_scenario("cave").unwrap();

    assert_eq!(config.max_turns, 100);
    assert!(items.template(&ItemId::new("sling")).is_some_and(|t| t.ranged));
    assert_eq!(factory.scenario_names().unwrap(), vec!["cave"]);
    assert_eq!(scenario.seed, None);

    let enemies = scenario.resolve_enemies(&bestiary).unwrap();
    let rng = PcgRng;
    let env = EncounterEnv::from_parts(&items, &rng, &config);
    let log = simulate_encounter(&scenario.player, &enemies, &env, 1);

    // sling opener at turn 0 kills the first bat
    assert_eq!(log.entries[1].turn(), 0);
    assert_eq!(log.entries[1].event.defender, "Bat 1");
    assert_eq!(log.entries[2].action(), LogAction::EnemyDeath);
}

#[test]
fn missing_files_report_path() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());

    let err = factory.load_items().unwrap_err();
    assert!(err.to_string().contains("items.ron"));
    assert!(factory.load_scenario("nowhere").is_err());
}

#[test]
fn shipped_scenarios_run_to_completion() {
    let factory = ContentFactory::new(shipped_data_dir());
    let config = factory.load_config().unwrap();
    let items = factory.load_items().unwrap();
    let bestiary = factory.load_bestiary().unwrap();
    let rng = PcgRng;
    let env = EncounterEnv::from_parts(&items, &rng, &config);

    let names = factory.scenario_names().unwrap();
    assert!(!names.is_empty());

    for name in names {
        let scenario = factory.load_scenario(&name).unwrap();
        let enemies = scenario.resolve_enemies(&bestiary).unwrap();
        let seed = scenario.seed.unwrap_or(0);

        let log = simulate_encounter(&scenario.player, &enemies, &env, seed);
        assert!(!log.is_empty(), "{name}");
        assert!(log.turns <= config.max_turns, "{name}");
        assert_eq!(log, simulate_encounter(&scenario.player, &enemies, &env, seed));
    }
}
