use crate::effects::EffectOutcome;
use serde::{Deserialize, Serialize};

/// Which trainer an event refers to. The challenger is the trainer who
/// started the battle and always moves first.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Challenger,
    Defender,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Challenger => 0,
            Side::Defender => 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
    },
    MoveUsed {
        side: Side,
        creature: String,
        move_name: String,
    },
    MoveMissed {
        side: Side,
        creature: String,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_health: u16,
    },
    EffectApplied {
        target: String,
        outcome: EffectOutcome,
    },
    CreatureFainted {
        side: Side,
        creature: String,
    },
    ExperienceGained {
        creature: String,
        amount: u32,
        levels_gained: u32,
        new_level: u32,
    },
    BadgeTransferred {
        badge: String,
    },
    NoBadgeToTransfer,
    BattleEnded {
        winner: Side,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line. `names` holds the
    /// challenger's and the defender's trainer names, in that order.
    /// Returns None for events that should not produce user-visible text.
    pub fn format(&self, names: &[String; 2]) -> Option<String> {
        match self {
            BattleEvent::RoundStarted { round } => Some(format!("--- Round {} ---", round)),
            BattleEvent::MoveUsed {
                side,
                creature,
                move_name,
            } => Some(format!(
                "{}'s {} used {}!",
                names[side.index()],
                creature,
                move_name
            )),
            BattleEvent::MoveMissed { creature, .. } => {
                Some(format!("{}'s attack missed!", creature))
            }
            BattleEvent::DamageDealt {
                target,
                damage,
                remaining_health,
            } => Some(format!(
                "{} took {} damage! ({} HP left)",
                target, damage, remaining_health
            )),
            BattleEvent::EffectApplied { target, outcome } => {
                if outcome.changed_target() {
                    Some(format!("{} {}!", target, outcome))
                } else {
                    None
                }
            }
            BattleEvent::CreatureFainted { side, creature } => Some(format!(
                "{}'s {} fainted!",
                names[side.index()],
                creature
            )),
            BattleEvent::ExperienceGained {
                creature,
                amount,
                levels_gained,
                new_level,
            } => {
                if *levels_gained > 0 {
                    Some(format!(
                        "{} gained {} experience and grew to level {}!",
                        creature, amount, new_level
                    ))
                } else {
                    Some(format!("{} gained {} experience.", creature, amount))
                }
            }
            BattleEvent::BadgeTransferred { badge } => Some(format!(
                "{} handed over the {}!",
                names[Side::Defender.index()],
                badge
            )),
            BattleEvent::NoBadgeToTransfer => Some(format!(
                "{} had no badge to hand over.",
                names[Side::Defender.index()]
            )),
            BattleEvent::BattleEnded { winner } => {
                Some(format!("{} won the battle!", names[winner.index()]))
            }
        }
    }
}

/// Everything that happened in one battle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleReport {
    /// Challenger's and defender's names, in that order.
    pub names: [String; 2],
    pub winner: Side,
    pub rounds: u32,
    pub events: Vec<BattleEvent>,
    /// The badge the challenger took from the defender, if any.
    pub badge: Option<String>,
}

impl BattleReport {
    pub fn challenger_won(&self) -> bool {
        self.winner == Side::Challenger
    }

    pub fn winner_name(&self) -> &str {
        &self.names[self.winner.index()]
    }

    /// The visible battle log, one line per event.
    pub fn narrate(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| event.format(&self.names))
            .collect()
    }
}
