mod model_helpers;
mod models;
pub mod bounded_grid;
mod bounds;
mod config;
mod error;
pub mod entity;
pub mod grid;
pub mod history;
mod board;

pub use models::{
    BoardStatus, BoxId, Direction, HistoryEntry, LegalMove, Occupant, Positions, TileKind, UserAction, Vec2,
};
pub use board::Board;
pub use bounds::BoundsOriginRoot;
pub use config::{ConfigError, EngineConfig, LogConfig, RulesConfig};
pub use entity::{CollisionPolicy, Entity, LegalMoves};
pub use error::LevelError;
pub use grid::Grid;
pub use history::History;
