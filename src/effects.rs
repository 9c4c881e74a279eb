use crate::creature::Creature;
use schema::{Effect, StatusCondition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an [`Effect`] actually did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    NoEffect,
    StatusInflicted(StatusCondition),
    Healed { amount: u16 },
    StatusCured(StatusCondition),
    LeveledUp { new_level: u32 },
}

impl EffectOutcome {
    pub fn changed_target(&self) -> bool {
        !matches!(self, EffectOutcome::NoEffect)
    }
}

impl fmt::Display for EffectOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectOutcome::NoEffect => write!(f, "it had no effect"),
            EffectOutcome::StatusInflicted(status) => write!(f, "was {}", status),
            EffectOutcome::Healed { amount } => write!(f, "recovered {} HP", amount),
            EffectOutcome::StatusCured(status) => write!(f, "is no longer {}", status),
            EffectOutcome::LeveledUp { new_level } => write!(f, "grew to level {}", new_level),
        }
    }
}

/// Applies an effect to its target. This is the single dispatch point for
/// both move effects and item effects.
pub fn apply_effect(effect: Effect, target: &mut Creature) -> EffectOutcome {
    match effect {
        Effect::None => EffectOutcome::NoEffect,
        Effect::InflictBurn | Effect::InflictPoison => match effect.inflicted_status() {
            Some(status) => inflict_status(target, status),
            None => EffectOutcome::NoEffect,
        },
        Effect::Heal(amount) => {
            let healed = target.heal(amount);
            if healed > 0 {
                EffectOutcome::Healed { amount: healed }
            } else {
                EffectOutcome::NoEffect
            }
        }
        Effect::CureStatus => match target.cure_status() {
            Some(status) => EffectOutcome::StatusCured(status),
            None => EffectOutcome::NoEffect,
        },
        // Levelling up restores full health, so it must not reach a fainted creature.
        Effect::LevelUp if target.is_fainted() => EffectOutcome::NoEffect,
        Effect::LevelUp => {
            let needed = target.experience_to_next_level();
            target.gain_experience(needed);
            EffectOutcome::LeveledUp {
                new_level: target.level(),
            }
        }
    }
}

fn inflict_status(target: &mut Creature, status: StatusCondition) -> EffectOutcome {
    // Fainted creatures and creatures that already carry a status are immune.
    if target.is_fainted() || target.status.is_some() {
        return EffectOutcome::NoEffect;
    }
    target.status = Some(status);
    EffectOutcome::StatusInflicted(status)
}
