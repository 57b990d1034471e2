use thiserror::Error;

use crate::core::Vec2;

/// Reasons a level description cannot become a board.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level grid has no rows")]
    EmptyGrid,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("level is {width}x{height}, more than {max} tiles")]
    TooLarge { width: usize, height: usize, max: usize },

    #[error("unknown tile symbol {symbol:?} at column {column}, row {row}")]
    UnknownSymbol { symbol: char, column: usize, row: usize },

    #[error("level has no player")]
    MissingPlayer,

    #[error("level has more than one player")]
    MultiplePlayers,

    #[error("{what} at {at:?} lies outside the {width}x{height} grid")]
    OutOfBounds { what: &'static str, at: Vec2, width: i32, height: i32 },

    #[error("{what} at {at:?} is placed on a wall")]
    OnWall { what: &'static str, at: Vec2 },

    #[error("more than one entity at {at:?}")]
    Overlapping { at: Vec2 },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
