//! Game data: the move list, species templates, item catalog, wild pool and
//! rival. Built once at start-up, either from the built-in defaults or from a
//! RON file, and handed to the session. Creatures and trainers are always
//! created through the factory methods here.

use crate::creature::{Creature, Stats};
use crate::errors::{GameError, GameResult};
use crate::item::Item;
use crate::moves::Move;
use crate::rng::RandomSource;
use crate::trainer::Trainer;
use schema::{Effect, ItemKind, MoveCategory, PokemonType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTemplate {
    pub name: String,
    pub pokemon_type: PokemonType,
    pub max_health: u16,
    pub stats: Stats,
    pub level: u32,
    /// Move names, looked up in `GameConfig::moves`.
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerTemplate {
    pub name: String,
    /// Species names, front of the team first.
    pub team: Vec<String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub moves: Vec<Move>,
    pub species: Vec<SpeciesTemplate>,
    pub items: Vec<Item>,
    pub starters: Vec<String>,
    pub wild_encounters: Vec<String>,
    /// Item names given to a new player.
    pub starting_inventory: Vec<String>,
    pub rival: TrainerTemplate,
}

impl GameConfig {
    /// Load and validate game data from a RON file.
    pub fn load(path: &Path) -> GameResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        log::info!(
            "Loaded game data from {}: {} moves, {} species, {} items",
            path.display(),
            config.moves.len(),
            config.species.len(),
            config.items.len()
        );
        Ok(config)
    }

    pub fn from_ron_str(content: &str) -> GameResult<Self> {
        let config: GameConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every name the data refers to is defined and that move
    /// numbers are in range.
    pub fn validate(&self) -> GameResult<()> {
        for move_ in &self.moves {
            if !(0.0..=1.0).contains(&move_.accuracy) {
                return Err(GameError::InvalidConfig(format!(
                    "move '{}' has accuracy {} outside [0, 1]",
                    move_.name, move_.accuracy
                )));
            }
            if move_.power == 0 && move_.category != MoveCategory::Status {
                return Err(GameError::InvalidConfig(format!(
                    "damaging move '{}' has zero power",
                    move_.name
                )));
            }
        }
        for species in &self.species {
            if species.moves.is_empty() {
                return Err(GameError::InvalidConfig(format!(
                    "species '{}' has no moves",
                    species.name
                )));
            }
            for move_name in &species.moves {
                self.find_move(move_name)?;
            }
        }
        if self.starters.is_empty() {
            return Err(GameError::InvalidConfig("no starters defined".to_string()));
        }
        if self.wild_encounters.is_empty() {
            return Err(GameError::InvalidConfig("no wild encounters defined".to_string()));
        }
        for name in self
            .starters
            .iter()
            .chain(&self.wild_encounters)
            .chain(&self.rival.team)
        {
            self.find_species(name)?;
        }
        for item_name in &self.starting_inventory {
            self.find_item(item_name)?;
        }
        Ok(())
    }

    pub fn find_move(&self, name: &str) -> GameResult<&Move> {
        self.moves
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    pub fn find_species(&self, name: &str) -> GameResult<&SpeciesTemplate> {
        self.species
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::UnknownSpecies(name.to_string()))
    }

    pub fn find_item(&self, name: &str) -> GameResult<&Item> {
        self.items
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::UnknownItem(name.to_string()))
    }

    /// A fresh creature of the named species, at full health.
    pub fn create_creature(&self, species_name: &str) -> GameResult<Creature> {
        let species = self.find_species(species_name)?;
        let moves = species
            .moves
            .iter()
            .map(|name| self.find_move(name).cloned())
            .collect::<GameResult<Vec<Move>>>()?;
        Ok(Creature::new(
            &species.name,
            species.pokemon_type,
            species.max_health,
            species.stats,
            species.level,
            moves,
        ))
    }

    pub fn create_wild_creature(&self, species_name: &str) -> GameResult<Creature> {
        let mut creature = self.create_creature(species_name)?;
        creature.is_wild = true;
        Ok(creature)
    }

    /// Pick a wild creature uniformly from the encounter pool.
    pub fn random_wild_encounter(&self, rng: &mut dyn RandomSource) -> GameResult<Creature> {
        if self.wild_encounters.is_empty() {
            return Err(GameError::InvalidConfig("no wild encounters defined".to_string()));
        }
        let index = rng.choose_index(self.wild_encounters.len(), "wild encounter");
        self.create_wild_creature(&self.wild_encounters[index])
    }

    /// A new player trainer with the chosen starter and the starting bag.
    pub fn create_player(&self, name: &str, starter: &str) -> GameResult<Trainer> {
        let mut trainer = Trainer::with_team(name, vec![self.create_creature(starter)?]);
        for item_name in &self.starting_inventory {
            trainer.add_item(self.find_item(item_name)?.clone());
        }
        Ok(trainer)
    }

    pub fn create_rival(&self) -> GameResult<Trainer> {
        let team = self
            .rival
            .team
            .iter()
            .map(|name| self.create_creature(name))
            .collect::<GameResult<Vec<Creature>>>()?;
        let mut rival = Trainer::with_team(&self.rival.name, team);
        rival.badges = self.rival.badges.clone();
        Ok(rival)
    }
}

fn species(
    name: &str,
    pokemon_type: PokemonType,
    max_health: u16,
    stats: [u16; 5],
    level: u32,
    moves: &[&str],
) -> SpeciesTemplate {
    let [attack, defense, special_attack, special_defense, speed] = stats;
    SpeciesTemplate {
        name: name.to_string(),
        pokemon_type,
        max_health,
        stats: Stats::new(attack, defense, special_attack, special_defense, speed),
        level,
        moves: moves.iter().map(|m| m.to_string()).collect(),
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        use MoveCategory::*;
        use PokemonType::*;

        let moves = vec![
            Move::new("Tackle", Physical, 40, 1.0),
            Move::new("Scratch", Physical, 40, 1.0),
            Move::new("Quick Attack", Physical, 40, 1.0),
            Move::new("Vine Whip", Physical, 45, 1.0),
            Move::new("Poison Sting", Physical, 15, 1.0).with_effect(Effect::InflictPoison),
            Move::new("Rock Throw", Physical, 50, 0.9),
            Move::new("Bite", Physical, 60, 1.0),
            Move::new("Ember", Special, 40, 1.0).with_effect(Effect::InflictBurn),
            Move::new("Water Gun", Special, 40, 1.0),
            Move::new("Thunder Shock", Special, 40, 1.0),
            Move::new("Gust", Special, 40, 1.0),
        ];

        let species = vec![
            species("Bulbasaur", Grass, 45, [49, 49, 65, 65, 45], 5, &["Tackle", "Vine Whip", "Poison Sting"]),
            species("Charmander", Fire, 39, [52, 43, 60, 50, 65], 5, &["Scratch", "Ember"]),
            species("Squirtle", Water, 44, [48, 65, 50, 64, 43], 5, &["Tackle", "Water Gun"]),
            species("Pikachu", Electric, 35, [55, 40, 50, 50, 90], 4, &["Thunder Shock", "Quick Attack"]),
            species("Pidgey", Flying, 40, [45, 40, 35, 35, 56], 3, &["Tackle", "Gust"]),
            species("Rattata", Normal, 30, [56, 35, 25, 35, 72], 3, &["Tackle", "Quick Attack"]),
            species("Weedle", Poison, 40, [35, 30, 20, 20, 50], 3, &["Poison Sting"]),
            species("Geodude", Rock, 40, [80, 100, 30, 30, 20], 6, &["Tackle", "Rock Throw"]),
            species("Onix", Rock, 35, [45, 160, 30, 45, 70], 8, &["Tackle", "Rock Throw", "Bite"]),
        ];

        let items = vec![
            Item::new("Potion", ItemKind::Medicine, Effect::Heal(20)),
            Item::new("Super Potion", ItemKind::Medicine, Effect::Heal(50)),
            Item::new("Full Heal", ItemKind::StatusCure, Effect::CureStatus),
            Item::new("Rare Candy", ItemKind::Training, Effect::LevelUp),
        ];

        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        GameConfig {
            moves,
            species,
            items,
            starters: names(&["Bulbasaur", "Charmander", "Squirtle"]),
            wild_encounters: names(&["Pidgey", "Rattata", "Weedle", "Pikachu"]),
            starting_inventory: names(&["Potion", "Potion", "Super Potion", "Full Heal", "Rare Candy"]),
            rival: TrainerTemplate {
                name: "Brock".to_string(),
                team: names(&["Geodude", "Onix"]),
                badges: names(&["Boulder Badge"]),
            },
        }
    }
}
