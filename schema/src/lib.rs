// Pocket Trainer Schema - Shared type definitions
// This crate contains the closed enums shared by the game data file, the
// save file and the battle engine. Everything here is plain data so that it
// can round-trip through any serde format.

pub use item_types::*;
pub use move_types::*;
pub use pokemon_types::*;

pub mod item_types;
pub mod move_types;
pub mod pokemon_types;
