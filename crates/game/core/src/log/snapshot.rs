use crate::state::{CombatantId, CombatantState};

/// Health bar state of one enemy at a point in the log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySnapshot {
    pub id: CombatantId,
    pub name: String,
    pub current_health: u32,
    pub max_health: u32,
}

/// Health and mana of both sides at the moment an entry was produced.
///
/// Replay viewers render health bars from these values alone and never
/// re-simulate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub player_health: u32,
    pub player_max_health: u32,
    pub player_mana: u32,
    pub player_max_mana: u32,
    /// Sum of current health over living enemies.
    pub enemies_health: u32,
    pub enemies: Vec<EnemySnapshot>,
}

impl Snapshot {
    pub fn capture(player: &CombatantState, enemies: &[CombatantState]) -> Self {
        Self {
            player_health: player.current_health,
            player_max_health: player.stats.max_health,
            player_mana: player.current_mana,
            player_max_mana: player.stats.max_mana,
            enemies_health: enemies
                .iter()
                .filter(|e| e.is_alive())
                .map(|e| e.current_health)
                .sum(),
            enemies: enemies
                .iter()
                .map(|e| EnemySnapshot {
                    id: e.id,
                    name: e.name.clone(),
                    current_health: e.current_health,
                    max_health: e.stats.max_health,
                })
                .collect(),
        }
    }

    /// Current health of a combatant by display name.
    pub fn health_of(&self, name: &str, player_name: &str) -> Option<u32> {
        if name == player_name {
            return Some(self.player_health);
        }
        self.enemies
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.current_health)
    }

    pub fn any_enemy_alive(&self) -> bool {
        self.enemies.iter().any(|e| e.current_health > 0)
    }
}
