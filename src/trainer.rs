use crate::battle::engine::run_battle;
use crate::battle::events::BattleReport;
use crate::catch::{roll_capture, CaptureDevice, CatchOutcome};
use crate::creature::Creature;
use crate::effects::{apply_effect, EffectOutcome};
use crate::errors::GameResult;
use crate::item::Item;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum ItemUseOutcome {
    Used {
        item: String,
        target: String,
        outcome: EffectOutcome,
    },
    NotFound {
        item: String,
    },
    InvalidTarget {
        index: usize,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trainer {
    pub name: String,

    // Ordered roster. Index 0 is the creature sent into battle.
    pub team: Vec<Creature>,

    pub inventory: Vec<Item>,

    pub badges: Vec<String>,
}

impl Trainer {
    pub fn new(name: &str) -> Self {
        Trainer {
            name: name.to_string(),
            team: Vec::new(),
            inventory: Vec::new(),
            badges: Vec::new(),
        }
    }

    pub fn with_team(name: &str, team: Vec<Creature>) -> Self {
        Trainer {
            team,
            ..Trainer::new(name)
        }
    }

    /// The creature at the front of the team.
    pub fn active_creature(&self) -> Option<&Creature> {
        self.team.first()
    }

    pub fn add_creature(&mut self, creature: Creature) {
        self.team.push(creature);
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Inventory grouped by name, in first-seen order.
    pub fn item_counts(&self) -> Vec<(&Item, usize)> {
        let mut counts: Vec<(&Item, usize)> = Vec::new();
        for item in &self.inventory {
            match counts.iter_mut().find(|(seen, _)| seen.name == item.name) {
                Some((_, count)) => *count += 1,
                None => counts.push((item, 1)),
            }
        }
        counts
    }

    /// Throw one capture device at a wild creature. A `None` device stands for
    /// an answer that did not name a device and always fails without a roll.
    pub fn catch_pokemon(
        &mut self,
        mut wild: Creature,
        device: Option<CaptureDevice>,
        rng: &mut dyn RandomSource,
    ) -> CatchOutcome {
        let Some(device) = device else {
            log::debug!("{} threw nothing at {}", self.name, wild.name);
            return CatchOutcome::InvalidDevice { pokemon: wild.name };
        };

        if !roll_capture(device, rng) {
            return CatchOutcome::BrokeFree {
                pokemon: wild.name,
                device,
            };
        }

        let pokemon = wild.name.clone();
        wild.is_wild = false;
        self.team.push(wild);
        log::info!("{} caught {} ({} on team)", self.name, pokemon, self.team.len());
        CatchOutcome::Caught {
            pokemon,
            device,
            team_size: self.team.len(),
        }
    }

    /// Use one item from the inventory on the team member at `target_index`.
    ///
    /// The effect is applied first and exactly one matching item is removed
    /// afterwards, even if the effect changed nothing. A missing item or bad
    /// index is reported, never raised.
    pub fn use_item(&mut self, item_name: &str, target_index: usize) -> ItemUseOutcome {
        let Some(position) = self.inventory.iter().position(|item| item.name == item_name) else {
            log::debug!("{} has no {}", self.name, item_name);
            return ItemUseOutcome::NotFound {
                item: item_name.to_string(),
            };
        };
        let Some(target) = self.team.get_mut(target_index) else {
            return ItemUseOutcome::InvalidTarget {
                index: target_index,
            };
        };

        let outcome = apply_effect(self.inventory[position].effect, target);
        let target_name = target.name.clone();
        let item = self.inventory.remove(position);
        log::info!("{} used {} on {}: {:?}", self.name, item.name, target_name, outcome);

        ItemUseOutcome::Used {
            item: item.name,
            target: target_name,
            outcome,
        }
    }

    /// Battle `opponent`. This trainer moves first every round.
    pub fn battle(
        &mut self,
        opponent: &mut Trainer,
        rng: &mut dyn RandomSource,
    ) -> GameResult<BattleReport> {
        run_battle(self, opponent, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Stats;
    use crate::rng::ScriptedRng;
    use pretty_assertions::assert_eq;
    use schema::{Effect, ItemKind, PokemonType, StatusCondition};

    fn pidgey() -> Creature {
        let mut pidgey = Creature::new(
            "Pidgey",
            PokemonType::Flying,
            40,
            Stats::new(45, 40, 35, 35, 56),
            3,
            vec![],
        );
        pidgey.is_wild = true;
        pidgey
    }

    fn potion() -> Item {
        Item::new("Potion", ItemKind::Medicine, Effect::Heal(20))
    }

    #[test]
    fn test_successful_catch_joins_team() {
        let mut trainer = Trainer::new("Red");
        let mut rng = ScriptedRng::new_for_test(vec![0.65]);

        let outcome = trainer.catch_pokemon(pidgey(), Some(CaptureDevice::GreatBall), &mut rng);
        assert_eq!(
            outcome,
            CatchOutcome::Caught {
                pokemon: "Pidgey".to_string(),
                device: CaptureDevice::GreatBall,
                team_size: 1,
            }
        );
        assert_eq!(trainer.team.len(), 1);
        assert!(!trainer.team[0].is_wild);
    }

    #[test]
    fn test_failed_catch_leaves_team_alone() {
        let mut trainer = Trainer::new("Red");
        let mut rng = ScriptedRng::new_for_test(vec![0.65]);

        let outcome = trainer.catch_pokemon(pidgey(), Some(CaptureDevice::PokeBall), &mut rng);
        assert!(!outcome.is_success());
        assert!(trainer.team.is_empty());
    }

    #[test]
    fn test_invalid_device_fails_without_rolling() {
        let mut trainer = Trainer::new("Red");
        let mut rng = ScriptedRng::new_for_test(vec![0.0]);

        let outcome = trainer.catch_pokemon(pidgey(), None, &mut rng);
        assert_eq!(
            outcome,
            CatchOutcome::InvalidDevice {
                pokemon: "Pidgey".to_string()
            }
        );
        assert_eq!(rng.remaining(), 1);
        assert!(trainer.team.is_empty());
    }

    #[test]
    fn test_use_item_consumes_exactly_one() {
        let mut trainer = Trainer::with_team("Red", vec![pidgey()]);
        trainer.team[0].take_damage(30);
        trainer.add_item(potion());
        trainer.add_item(potion());

        let outcome = trainer.use_item("Potion", 0);
        assert_eq!(
            outcome,
            ItemUseOutcome::Used {
                item: "Potion".to_string(),
                target: "Pidgey".to_string(),
                outcome: EffectOutcome::Healed { amount: 20 },
            }
        );
        assert_eq!(trainer.team[0].health(), 30);
        assert_eq!(trainer.inventory.len(), 1);
    }

    #[test]
    fn test_use_item_is_consumed_even_without_effect() {
        let mut trainer = Trainer::with_team("Red", vec![pidgey()]);
        trainer.add_item(Item::new("Full Heal", ItemKind::StatusCure, Effect::CureStatus));

        let outcome = trainer.use_item("Full Heal", 0);
        assert!(matches!(
            outcome,
            ItemUseOutcome::Used {
                outcome: EffectOutcome::NoEffect,
                ..
            }
        ));
        assert!(trainer.inventory.is_empty());
    }

    #[test]
    fn test_use_item_cures_status() {
        let mut trainer = Trainer::with_team("Red", vec![pidgey()]);
        trainer.team[0].status = Some(StatusCondition::Poison);
        trainer.add_item(Item::new("Full Heal", ItemKind::StatusCure, Effect::CureStatus));

        trainer.use_item("Full Heal", 0);
        assert_eq!(trainer.team[0].status, None);
    }

    #[test]
    fn test_missing_item_is_reported() {
        let mut trainer = Trainer::with_team("Red", vec![pidgey()]);
        trainer.add_item(potion());
        let before = trainer.clone();

        assert_eq!(
            trainer.use_item("Rare Candy", 0),
            ItemUseOutcome::NotFound {
                item: "Rare Candy".to_string()
            }
        );
        assert_eq!(trainer, before);
    }

    #[test]
    fn test_invalid_target_keeps_item() {
        let mut trainer = Trainer::with_team("Red", vec![pidgey()]);
        trainer.add_item(potion());

        assert_eq!(
            trainer.use_item("Potion", 3),
            ItemUseOutcome::InvalidTarget { index: 3 }
        );
        assert_eq!(trainer.inventory.len(), 1);
    }

    #[test]
    fn test_item_counts_group_by_name() {
        let mut trainer = Trainer::new("Red");
        trainer.add_item(potion());
        trainer.add_item(Item::new("Rare Candy", ItemKind::Training, Effect::LevelUp));
        trainer.add_item(potion());

        let counts: Vec<(&str, usize)> = trainer
            .item_counts()
            .into_iter()
            .map(|(item, count)| (item.name.as_str(), count))
            .collect();
        assert_eq!(counts, vec![("Potion", 2), ("Rare Candy", 1)]);
    }
}
