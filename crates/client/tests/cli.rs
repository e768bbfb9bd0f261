use std::path::PathBuf;
use std::process::{Command, Output};

use encounter_core::CombatLog;
use encounter_core::log::archive::digest_bytes;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn encounter(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_encounter"))
        .args(args)
        .env("ENCOUNTER_DATA_DIR", data_dir())
        .env_remove("RUST_LOG")
        .output()
        .expect("run encounter binary")
}

#[test]
fn list_shows_shipped_scenarios() {
    let out = encounter(&["list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("goblin_ambush"));
    assert!(stdout.contains("arcane_trial"));
}

#[test]
fn simulate_archive_then_verified_replay() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("ambush.bin");
    let archive_arg = archive.to_str().expect("utf-8 path");

    let out = encounter(&[
        "simulate",
        "--scenario",
        "goblin_ambush",
        "--seed",
        "42",
        "--out",
        archive_arg,
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let bytes = std::fs::read(&archive).expect("archive written");
    let log = CombatLog::decode(&bytes).expect("archive decodes");
    assert_eq!(log.seed, 42);
    assert_eq!(log.player_name, "Aria");

    let digest = hex::encode(digest_bytes(&bytes));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&digest));

    let replay = encounter(&["replay", archive_arg, "--digest", &digest]);
    assert!(replay.status.success());
    assert!(String::from_utf8_lossy(&replay.stdout).contains("Final standings"));

    let mut tampered = digest.into_bytes();
    tampered[0] = if tampered[0] == b'0' { b'1' } else { b'0' };
    let tampered = String::from_utf8(tampered).expect("hex is ascii");
    let rejected = encounter(&["replay", archive_arg, "--digest", &tampered]);
    assert!(!rejected.status.success());
}

#[test]
fn json_output_parses_as_log() {
    let out = encounter(&[
        "simulate",
        "--scenario",
        "arcane_trial",
        "--format",
        "json",
    ]);
    assert!(out.status.success());
    let log: CombatLog = serde_json::from_slice(&out.stdout).expect("json log");
    assert_eq!(log.seed, 2024);
    assert!(!log.is_empty());
}

#[test]
fn unknown_scenario_fails() {
    let out = encounter(&["simulate", "--scenario", "no_such_place"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no_such_place"));
}
