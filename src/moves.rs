use schema::{Effect, MoveCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move a creature can use in battle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    pub category: MoveCategory,
    pub power: u16,
    /// Hit chance in `[0, 1]`.
    pub accuracy: f64,
    #[serde(default)]
    pub effect: Effect,
}

impl Move {
    pub fn new(name: &str, category: MoveCategory, power: u16, accuracy: f64) -> Self {
        Move {
            name: name.to_string(),
            category,
            power,
            accuracy,
            effect: Effect::None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// A roll above the accuracy is a miss; a roll equal to it still hits.
    pub fn misses(&self, roll: f64) -> bool {
        roll > self.accuracy
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, power {}, accuracy {:.0}%",
            self.name,
            self.category,
            self.power,
            self.accuracy * 100.0
        )?;
        if !self.effect.is_none() {
            write!(f, ", {}", self.effect)?;
        }
        write!(f, ")")
    }
}
