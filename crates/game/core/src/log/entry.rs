use crate::combat::Hand;
use crate::state::Element;

use super::Snapshot;

/// Closed vocabulary of log actions a consumer must be able to render.
///
/// The string forms are the persisted names and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogAction {
    #[strum(serialize = "starts a fight with")]
    #[cfg_attr(feature = "serde", serde(rename = "starts a fight with"))]
    FightStart,
    #[strum(serialize = "attacks")]
    #[cfg_attr(feature = "serde", serde(rename = "attacks"))]
    Attack,
    #[strum(serialize = "magicAttack")]
    #[cfg_attr(feature = "serde", serde(rename = "magicAttack"))]
    MagicAttack,
    #[strum(serialize = "dodge")]
    #[cfg_attr(feature = "serde", serde(rename = "dodge"))]
    Dodge,
    #[strum(serialize = "death")]
    #[cfg_attr(feature = "serde", serde(rename = "death"))]
    Death,
    #[strum(serialize = "enemy_death")]
    #[cfg_attr(feature = "serde", serde(rename = "enemy_death"))]
    EnemyDeath,
    #[strum(serialize = "all_enemies_defeated")]
    #[cfg_attr(feature = "serde", serde(rename = "all_enemies_defeated"))]
    AllEnemiesDefeated,
    #[strum(serialize = "effectApplied")]
    #[cfg_attr(feature = "serde", serde(rename = "effectApplied"))]
    EffectApplied,
    /// Reserved for special abilities outside the core engine.
    #[strum(serialize = "specialAttack")]
    #[cfg_attr(feature = "serde", serde(rename = "specialAttack"))]
    SpecialAttack,
    /// Reserved for boss abilities outside the core engine.
    #[strum(serialize = "bossAbility")]
    #[cfg_attr(feature = "serde", serde(rename = "bossAbility"))]
    BossAbility,
}

impl LogAction {
    /// Death action for a defender on the given side.
    pub fn death_of(player_side: bool) -> Self {
        if player_side { Self::Death } else { Self::EnemyDeath }
    }

    pub fn is_death(self) -> bool {
        matches!(self, Self::Death | Self::EnemyDeath)
    }

    /// Actions where the attacker actually swings at the defender.
    pub fn is_strike(self) -> bool {
        matches!(self, Self::Attack | Self::MagicAttack | Self::Dodge)
    }
}

/// Sub-tag of an `effectApplied` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTag {
    /// Burning damage ticked on the combatant.
    #[strum(serialize = "burningTarget")]
    #[cfg_attr(feature = "serde", serde(rename = "burningTarget"))]
    BurningTarget,
    /// A frozen combatant skipped its attacks.
    #[strum(serialize = "frozen_no_attack")]
    #[cfg_attr(feature = "serde", serde(rename = "frozen_no_attack"))]
    FrozenNoAttack,
    /// An on-hit proc froze the defender.
    #[strum(serialize = "frozenTarget")]
    #[cfg_attr(feature = "serde", serde(rename = "frozenTarget"))]
    FrozenTarget,
    /// An on-hit proc set the defender on fire.
    #[strum(serialize = "ignitedTarget")]
    #[cfg_attr(feature = "serde", serde(rename = "ignitedTarget"))]
    IgnitedTarget,
    /// An on-hit proc reduced the defender's attacks.
    #[strum(serialize = "slowedTarget")]
    #[cfg_attr(feature = "serde", serde(rename = "slowedTarget"))]
    SlowedTarget,
    /// The defender's hard skin absorbed part of a hit.
    #[strum(serialize = "hardSkin")]
    #[cfg_attr(feature = "serde", serde(rename = "hardSkin"))]
    HardSkin,
    /// Mana surged back to full.
    #[strum(serialize = "manaSurge")]
    #[cfg_attr(feature = "serde", serde(rename = "manaSurge"))]
    ManaSurge,
}

/// One simulated event, before the health snapshot is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    pub turn: u32,
    pub attacker: String,
    pub defender: String,
    pub action: LogAction,
    pub effect: Option<EffectTag>,
    pub hand: Option<Hand>,
    pub damage: Option<u32>,
    pub health_gained: Option<u32>,
    pub mana_gained: Option<u32>,
    pub damage_reduced: Option<u32>,
    pub element: Option<Element>,
    pub is_crit: bool,
}

impl LogEvent {
    pub fn new(
        turn: u32,
        action: LogAction,
        attacker: impl Into<String>,
        defender: impl Into<String>,
    ) -> Self {
        Self {
            turn,
            attacker: attacker.into(),
            defender: defender.into(),
            action,
            effect: None,
            hand: None,
            damage: None,
            health_gained: None,
            mana_gained: None,
            damage_reduced: None,
            element: None,
            is_crit: false,
        }
    }

    /// An `effectApplied` event on a single combatant.
    pub fn effect(turn: u32, tag: EffectTag, attacker: &str, defender: &str) -> Self {
        let mut event = Self::new(turn, LogAction::EffectApplied, attacker, defender);
        event.effect = Some(tag);
        event
    }

    pub fn with_hand(mut self, hand: Hand) -> Self {
        self.hand = Some(hand);
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_crit(mut self, is_crit: bool) -> Self {
        self.is_crit = is_crit;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// Records a positive gain; zero gains stay `None`.
    pub fn with_health_gained(mut self, gained: u32) -> Self {
        self.health_gained = (gained > 0).then_some(gained);
        self
    }

    pub fn with_mana_gained(mut self, gained: u32) -> Self {
        self.mana_gained = (gained > 0).then_some(gained);
        self
    }

    pub fn with_damage_reduced(mut self, reduced: u32) -> Self {
        self.damage_reduced = (reduced > 0).then_some(reduced);
        self
    }

    /// Attaches the snapshot, freezing the event into a log entry.
    pub fn stamp(self, snapshot: Snapshot) -> CombatLogEntry {
        CombatLogEntry {
            event: self,
            snapshot,
        }
    }
}

/// Immutable, snapshot-carrying record of one simulated event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLogEntry {
    pub event: LogEvent,
    pub snapshot: Snapshot,
}

impl CombatLogEntry {
    pub fn turn(&self) -> u32 {
        self.event.turn
    }

    pub fn action(&self) -> LogAction {
        self.event.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_match_vocabulary() {
        assert_eq!(LogAction::FightStart.to_string(), "starts a fight with");
        assert_eq!(LogAction::MagicAttack.as_ref(), "magicAttack");
        assert_eq!(LogAction::EnemyDeath.to_string(), "enemy_death");
        assert_eq!("all_enemies_defeated".parse(), Ok(LogAction::AllEnemiesDefeated));
        assert_eq!(EffectTag::FrozenNoAttack.to_string(), "frozen_no_attack");
        assert_eq!(EffectTag::BurningTarget.to_string(), "burningTarget");
    }

    #[test]
    fn zero_gains_are_omitted() {
        let event = LogEvent::new(1, LogAction::Attack, "a", "b")
            .with_health_gained(0)
            .with_mana_gained(4);
        assert_eq!(event.health_gained, None);
        assert_eq!(event.mana_gained, Some(4));
    }
}
