//! The ordered combat log: the only artifact an encounter produces.
//!
//! Every entry carries a [`Snapshot`] so a viewer can render historical
//! health bars without re-simulating. With the `serde` feature, logs can be
//! archived with bincode and fingerprinted with SHA-256 (see [`archive`]).
mod entry;
mod snapshot;

#[cfg(feature = "serde")]
pub mod archive;

pub use entry::{CombatLogEntry, EffectTag, LogAction, LogEvent};
pub use snapshot::{EnemySnapshot, Snapshot};

/// How an encounter ended, as far as the log shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Every enemy is dead and the player is alive.
    Victory,
    /// The player is dead.
    Defeat,
    /// The turn ceiling stopped the encounter with both sides standing.
    Undecided,
}

/// Ordered, replayable record of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    /// Name used to decide which entries belong to the player side.
    pub player_name: String,
    pub seed: u64,
    /// Last turn number reached (0 if the encounter ended during the opener).
    pub turns: u32,
    pub entries: Vec<CombatLogEntry>,
}

impl CombatLog {
    pub fn new(player_name: impl Into<String>, seed: u64) -> Self {
        Self {
            player_name: player_name.into(),
            seed,
            turns: 0,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: CombatLogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatLogEntry> {
        self.entries.iter()
    }

    /// True if `name` is the player side. Ownership is name equality.
    pub fn is_player(&self, name: &str) -> bool {
        name == self.player_name
    }

    pub fn entries_for_turn(&self, turn: u32) -> impl Iterator<Item = &CombatLogEntry> {
        self.entries.iter().filter(move |e| e.turn() == turn)
    }

    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.entries.last().map(|e| &e.snapshot)
    }

    /// Outcome derived from the final snapshot.
    pub fn outcome(&self) -> Outcome {
        match self.last_snapshot() {
            Some(s) if s.player_health == 0 => Outcome::Defeat,
            Some(s) if !s.any_enemy_alive() => Outcome::Victory,
            _ => Outcome::Undecided,
        }
    }
}

impl<'a> IntoIterator for &'a CombatLog {
    type Item = &'a CombatLogEntry;
    type IntoIter = core::slice::Iter<'a, CombatLogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
