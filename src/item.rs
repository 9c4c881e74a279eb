use schema::{Effect, ItemKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A consumable held in a trainer's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub effect: Effect,
}

impl Item {
    pub fn new(name: &str, kind: ItemKind, effect: Effect) -> Self {
        Item {
            name: name.to_string(),
            kind,
            effect,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.name, self.kind, self.effect)
    }
}
