use crate::creature::{Creature, Stats};
use crate::moves::Move;
use crate::rng::ScriptedRng;
use crate::trainer::Trainer;
use schema::{MoveCategory, PokemonType};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let squirtle = TestCreatureBuilder::new("Squirtle", 5)
///     .with_health(44)
///     .with_moves(vec![tackle()])
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    level: u32,
    max_health: u16,
    stats: Stats,
    moves: Option<Vec<Move>>,
    current_health: Option<u16>,
}

impl TestCreatureBuilder {
    /// Creates a new builder with balanced stats of 50 and 50 max health.
    pub fn new(name: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            level,
            max_health: 50,
            stats: Stats::new(50, 50, 50, 50, 50),
            moves: None,
            current_health: None,
        }
    }

    pub fn with_max_health(mut self, max_health: u16) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the moves. Without this the creature knows only Tackle.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_health(mut self, health: u16) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn build(self) -> Creature {
        let moves = self.moves.unwrap_or_else(|| vec![tackle()]);
        let mut creature = Creature::new(
            &self.name,
            PokemonType::Normal,
            self.max_health,
            self.stats,
            self.level,
            moves,
        );
        if let Some(health) = self.current_health {
            creature.set_health(health);
        }
        creature
    }
}

pub fn tackle() -> Move {
    Move::new("Tackle", MoveCategory::Physical, 40, 1.0)
}

/// A move strong enough to knock out any default test creature in one hit.
pub fn knockout_move() -> Move {
    Move::new("Mega Punch", MoveCategory::Physical, 500, 1.0)
}

pub fn create_test_trainer(name: &str, team: Vec<Creature>, badges: &[&str]) -> Trainer {
    let mut trainer = Trainer::with_team(name, team);
    trainer.badges = badges.iter().map(|b| b.to_string()).collect();
    trainer
}

/// A `ScriptedRng` with a long list of mid-range rolls: every move hits and
/// move selection picks the middle of the list. Useful when the specific
/// outcome is not important.
pub fn predictable_rng() -> ScriptedRng {
    ScriptedRng::new_for_test(vec![0.5; 200])
}
