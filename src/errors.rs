use schema::MoveCategory;
use thiserror::Error;

/// Main error type for the Pocket Trainer game.
///
/// Only conditions that point at malformed data or a broken environment end
/// up here. Expected user-input mistakes (a bad menu choice, a missing item,
/// an unknown capture device) are reported through outcome enums instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// A move without a damaging category was used to attack
    #[error("move '{move_name}' has category {category}, which cannot deal damage")]
    InvalidMoveCategory {
        move_name: String,
        category: MoveCategory,
    },

    /// A creature was sent into battle without any moves
    #[error("{creature} does not know any moves")]
    NoMovesKnown { creature: String },

    /// Game data referenced a species that is not defined
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),

    /// Game data referenced a move that is not defined
    #[error("unknown move '{0}'")]
    UnknownMove(String),

    /// Game data referenced an item that is not defined
    #[error("unknown item '{0}'")]
    UnknownItem(String),

    /// Game data is internally inconsistent
    #[error("invalid game data: {0}")]
    InvalidConfig(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save data could not be encoded or decoded: {0}")]
    SaveFormat(#[from] postcard::Error),

    #[error("game data file could not be parsed: {0}")]
    ConfigFormat(#[from] ron::error::SpannedError),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
