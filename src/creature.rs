use crate::effects::{apply_effect, EffectOutcome};
use crate::errors::{GameError, GameResult};
use crate::moves::Move;
use crate::rng::RandomSource;
use schema::{MoveCategory, PokemonType, StatType, StatusCondition};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

// Experience needed per level: a creature levels up while experience >= level * 10.
pub const EXPERIENCE_PER_LEVEL: u64 = 10;
pub const LEVEL_UP_HEALTH_BONUS: u16 = 5;
pub const LEVEL_UP_STAT_BONUS: u16 = 2;
// Added to the defending stat so a zero defense cannot divide by zero.
const DEFENSE_OFFSET: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl Stats {
    pub fn new(attack: u16, defense: u16, special_attack: u16, special_defense: u16, speed: u16) -> Self {
        Stats {
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn get(&self, stat: StatType) -> u16 {
        match stat {
            StatType::Attack => self.attack,
            StatType::Defense => self.defense,
            StatType::SpecialAttack => self.special_attack,
            StatType::SpecialDefense => self.special_defense,
            StatType::Speed => self.speed,
        }
    }

    fn get_mut(&mut self, stat: StatType) -> &mut u16 {
        match stat {
            StatType::Attack => &mut self.attack,
            StatType::Defense => &mut self.defense,
            StatType::SpecialAttack => &mut self.special_attack,
            StatType::SpecialDefense => &mut self.special_defense,
            StatType::Speed => &mut self.speed,
        }
    }
}

/// The result of one attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Missed,
    Hit {
        damage: u16,
        fainted: bool,
        effect: EffectOutcome,
    },
}

impl AttackOutcome {
    /// Damage dealt; a miss reports zero.
    pub fn damage(&self) -> u16 {
        match self {
            AttackOutcome::Missed => 0,
            AttackOutcome::Hit { damage, .. } => *damage,
        }
    }

    pub fn knocked_out(&self) -> bool {
        matches!(self, AttackOutcome::Hit { fainted: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub pokemon_type: PokemonType,
    health: u16,
    max_health: u16,
    pub stats: Stats,
    level: u32,
    experience: u32,
    pub moves: Vec<Move>,
    pub is_wild: bool,
    pub status: Option<StatusCondition>,
}

impl Creature {
    /// Create a creature at full health with no experience.
    pub fn new(
        name: &str,
        pokemon_type: PokemonType,
        max_health: u16,
        stats: Stats,
        level: u32,
        moves: Vec<Move>,
    ) -> Self {
        Creature {
            name: name.to_string(),
            pokemon_type,
            health: max_health,
            max_health,
            stats,
            level: level.max(1),
            experience: 0,
            moves,
            is_wild: false,
            status: None,
        }
    }

    pub fn health(&self) -> u16 {
        self.health
    }

    pub fn max_health(&self) -> u16 {
        self.max_health
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }

    /// Set the current health directly, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: u16) {
        self.health = health.min(self.max_health);
    }

    /// Attack `opponent` with `move_`.
    ///
    /// The category is validated before the accuracy roll, so a misconfigured
    /// move fails the same way whether it would have hit or not.
    pub fn attack_opponent(
        &self,
        opponent: &mut Creature,
        move_: &Move,
        rng: &mut dyn RandomSource,
    ) -> GameResult<AttackOutcome> {
        let damage = self.calculate_damage(opponent, move_)?;

        let roll = rng.next_f64("accuracy check");
        if move_.misses(roll) {
            log::debug!(
                "{}'s {} missed (roll {:.3} > accuracy {:.3})",
                self.name,
                move_.name,
                roll,
                move_.accuracy
            );
            return Ok(AttackOutcome::Missed);
        }

        let fainted = opponent.take_damage(damage);
        let effect = apply_effect(move_.effect, opponent);
        log::debug!(
            "{}'s {} dealt {} damage to {} ({}/{} HP left)",
            self.name,
            move_.name,
            damage,
            opponent.name,
            opponent.health,
            opponent.max_health
        );

        Ok(AttackOutcome::Hit {
            damage,
            fainted,
            effect,
        })
    }

    /// Damage = floor(attack * power / (defense + 10)), never below 1.
    pub fn calculate_damage(&self, opponent: &Creature, move_: &Move) -> GameResult<u16> {
        let (attack, defense) = match move_.category {
            MoveCategory::Physical => (
                self.stats.get(StatType::Attack),
                opponent.stats.get(StatType::Defense),
            ),
            MoveCategory::Special => (
                self.stats.get(StatType::SpecialAttack),
                opponent.stats.get(StatType::SpecialDefense),
            ),
            category => {
                return Err(GameError::InvalidMoveCategory {
                    move_name: move_.name.clone(),
                    category,
                })
            }
        };

        let raw = attack as u32 * move_.power as u32 / (defense as u32 + DEFENSE_OFFSET);
        Ok(u16::try_from(raw).unwrap_or(u16::MAX).max(1))
    }

    /// Subtract `amount` from health, clamping at zero. Returns true if this
    /// creature is now fainted.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            log::debug!("{} fainted", self.name);
        }
        self.is_fainted()
    }

    /// Restore up to `amount` health. Fainted creatures cannot be healed.
    /// Returns how much was actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if self.is_fainted() {
            return 0;
        }
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    pub fn cure_status(&mut self) -> Option<StatusCondition> {
        self.status.take()
    }

    /// Add experience and level up as many times as the new total allows.
    /// Returns the number of levels gained.
    ///
    /// Experience is fixed for the duration of the loop while the threshold
    /// grows by ten per level, so the loop runs at most `experience / 10`
    /// times.
    pub fn gain_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut levels_gained = 0;
        while self.experience as u64 >= self.level as u64 * EXPERIENCE_PER_LEVEL {
            self.level_up();
            levels_gained += 1;
        }
        levels_gained
    }

    /// Experience still missing before the next level-up.
    pub fn experience_to_next_level(&self) -> u32 {
        let threshold = self.level as u64 * EXPERIENCE_PER_LEVEL;
        threshold.saturating_sub(self.experience as u64).min(u32::MAX as u64) as u32
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.max_health = self.max_health.saturating_add(LEVEL_UP_HEALTH_BONUS);
        self.health = self.max_health;
        for stat in StatType::iter().filter(|s| s.is_combat_stat()) {
            let value = self.stats.get_mut(stat);
            *value = value.saturating_add(LEVEL_UP_STAT_BONUS);
        }
        log::info!("{} grew to level {}", self.name, self.level);
    }

    /// Append a move. There is no cap on how many moves a creature knows.
    pub fn learn_move(&mut self, move_: Move) {
        log::debug!("{} learned {}", self.name, move_.name);
        self.moves.push(move_);
    }

    /// Multi-line stat sheet used by the catch prompt and the team view.
    pub fn stat_sheet(&self) -> String {
        let mut sheet = format!("{}\n", self);
        for stat in StatType::iter() {
            sheet.push_str(&format!("  {:<12} {}\n", stat.to_string(), self.stats.get(stat)));
        }
        sheet.push_str(&format!("  {:<12} {}\n", "Experience", self.experience));
        let moves: Vec<&str> = self.moves.iter().map(|m| m.name.as_str()).collect();
        sheet.push_str(&format!("  {:<12} {}\n", "Moves", moves.join(", ")));
        sheet
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) Lv.{} HP {}/{}",
            self.name, self.pokemon_type, self.level, self.health, self.max_health
        )?;
        if let Some(status) = self.status {
            write!(f, " [{}]", status)?;
        }
        Ok(())
    }
}
