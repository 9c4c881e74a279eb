use crate::pokemon_types::StatusCondition;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display)]
pub enum MoveCategory {
    Physical,
    Special,
    // Not a damaging category. Attacking with it is a data error.
    Status,
}

/// The closed set of side effects a move or item can carry.
///
/// Effects are data, not code: the game dispatches on the tag, which keeps
/// moves and items serializable into the save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Effect {
    #[default]
    None,
    InflictBurn,
    InflictPoison,
    Heal(u16),
    CureStatus,
    LevelUp,
}

impl Effect {
    /// The status condition this effect inflicts, if any.
    pub fn inflicted_status(&self) -> Option<StatusCondition> {
        match self {
            Effect::InflictBurn => Some(StatusCondition::Burn),
            Effect::InflictPoison => Some(StatusCondition::Poison),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "no effect"),
            Effect::InflictBurn => write!(f, "may burn"),
            Effect::InflictPoison => write!(f, "may poison"),
            Effect::Heal(amount) => write!(f, "restores {} HP", amount),
            Effect::CureStatus => write!(f, "cures status"),
            Effect::LevelUp => write!(f, "raises level by one"),
        }
    }
}
