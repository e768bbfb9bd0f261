//! Terminal rendering of combat logs.
//!
//! Everything here reads the log alone. Health values come from the snapshot
//! stamped on each entry, so a replay never re-simulates.

use console::{StyledObject, style};
use encounter_core::{CombatLog, CombatLogEntry, EffectTag, Hand, LogAction, LogEvent, Snapshot};

const BAR_WIDTH: usize = 20;

/// One-line description of an event, without styling.
pub fn describe(event: &LogEvent) -> String {
    let attacker = &event.attacker;
    let defender = &event.defender;
    let damage = event.damage.unwrap_or(0);

    let mut line = match event.action {
        LogAction::FightStart => format!("{} starts a fight with {}", attacker, defender),
        LogAction::Attack => format!("{} attacks {} for {}", attacker, defender, damage),
        LogAction::MagicAttack => match event.element {
            Some(element) => format!(
                "{} casts {} at {} for {}",
                attacker, element, defender, damage
            ),
            None => format!("{} casts at {} for {}", attacker, defender, damage),
        },
        LogAction::Dodge => format!("{} dodges {}", defender, attacker),
        LogAction::Death | LogAction::EnemyDeath => format!("{} dies", defender),
        LogAction::AllEnemiesDefeated => format!("{} defeated all enemies", attacker),
        LogAction::EffectApplied => describe_effect(event),
        LogAction::SpecialAttack => format!("{} uses a special attack on {}", attacker, defender),
        LogAction::BossAbility => format!("{} unleashes an ability on {}", attacker, defender),
    };

    if event.is_crit {
        line.push_str(" (critical)");
    }
    if event.hand == Some(Hand::Off) {
        line.push_str(" [off hand]");
    }
    if event.action.is_strike() {
        if let Some(reduced) = event.damage_reduced {
            line.push_str(&format!(", {} blocked", reduced));
        }
    }
    if let Some(gained) = event.health_gained {
        line.push_str(&format!(", +{} health", gained));
    }
    if let Some(gained) = event.mana_gained {
        if event.effect != Some(EffectTag::ManaSurge) {
            line.push_str(&format!(", +{} mana", gained));
        }
    }
    line
}

fn describe_effect(event: &LogEvent) -> String {
    let attacker = &event.attacker;
    let defender = &event.defender;
    match event.effect {
        Some(EffectTag::BurningTarget) => {
            format!("{} burns for {}", defender, event.damage.unwrap_or(0))
        }
        Some(EffectTag::FrozenNoAttack) => format!("{} is frozen and cannot attack", attacker),
        Some(EffectTag::FrozenTarget) => format!("{} freezes {}", attacker, defender),
        Some(EffectTag::IgnitedTarget) => format!("{} sets {} on fire", attacker, defender),
        Some(EffectTag::SlowedTarget) => format!("{} slows {}", attacker, defender),
        Some(EffectTag::HardSkin) => format!(
            "{}'s hard skin absorbs {}",
            defender,
            event.damage_reduced.unwrap_or(0)
        ),
        Some(EffectTag::ManaSurge) => format!(
            "{} surges back to full mana (+{})",
            attacker,
            event.mana_gained.unwrap_or(0)
        ),
        None => format!("{} affects {}", attacker, defender),
    }
}

/// Fixed-width text health bar.
pub fn health_bar(current: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (current.min(max) as usize * BAR_WIDTH).div_ceil(max as usize)
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn paint(text: String, entry: &CombatLogEntry, log: &CombatLog) -> StyledObject<String> {
    let styled = if log.is_player(&entry.event.attacker) {
        style(text).green()
    } else {
        style(text).red()
    };
    if entry.action().is_death() || entry.action() == LogAction::AllEnemiesDefeated {
        styled.bold()
    } else {
        styled
    }
}

/// Prints the header, every entry and the final standings.
pub fn print_log(log: &CombatLog) {
    println!(
        "{} {}  {} {}  {} {}  {} {}",
        style("Player:").bold().cyan(),
        log.player_name,
        style("Seed:").bold().cyan(),
        log.seed,
        style("Turns:").bold().cyan(),
        log.turns,
        style("Outcome:").bold().cyan(),
        log.outcome()
    );
    println!();

    let mut turn = None;
    for entry in log {
        if turn != Some(entry.turn()) {
            turn = Some(entry.turn());
            println!("{}", style(format!("-- turn {} --", entry.turn())).dim());
        }
        println!(
            "  {}  {}",
            paint(describe(&entry.event), entry, log),
            style(format!(
                "hp {}/{}",
                entry.snapshot.player_health, entry.snapshot.player_max_health
            ))
            .dim()
        );
    }

    if let Some(snapshot) = log.last_snapshot() {
        println!();
        print_standings(log, snapshot);
    }
}

fn print_standings(log: &CombatLog, snapshot: &Snapshot) {
    println!("{}", style("Final standings:").bold().yellow());
    println!(
        "  {:<16} {} {}/{}  mana {}/{}",
        log.player_name,
        health_bar(snapshot.player_health, snapshot.player_max_health),
        snapshot.player_health,
        snapshot.player_max_health,
        snapshot.player_mana,
        snapshot.player_max_mana
    );
    for enemy in &snapshot.enemies {
        println!(
            "  {:<16} {} {}/{}",
            enemy.name,
            health_bar(enemy.current_health, enemy.max_health),
            enemy.current_health,
            enemy.max_health
        );
    }
}
