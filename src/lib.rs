//! Pocket Trainer
//!
//! A small turn-based creature battling game: pick a starter, battle a
//! scripted rival, catch wild creatures, use items, and save or load your
//! progress. Every random decision goes through an injectable
//! [`RandomSource`], so battles are fully reproducible from a seed or a
//! scripted list of rolls.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catch;
pub mod config;
pub mod creature;
pub mod effects;
pub mod errors;
pub mod item;
pub mod moves;
pub mod persistence;
pub mod rng;
pub mod session;
pub mod trainer;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{Effect, ItemKind, MoveCategory, PokemonType, StatType, StatusCondition};

// --- From this crate's modules (`src/`) ---
pub use battle::engine::{run_battle, BattlePhase};
pub use battle::events::{BattleEvent, BattleReport, Side};
pub use catch::{CaptureDevice, CatchOutcome};
pub use config::GameConfig;
pub use creature::{AttackOutcome, Creature, Stats};
pub use effects::{apply_effect, EffectOutcome};
pub use errors::{GameError, GameResult};
pub use item::Item;
pub use moves::Move;
pub use persistence::{load_game, save_game};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use trainer::{ItemUseOutcome, Trainer};
