// Push-box puzzle engine: a single player walks a grid, pushes at most one box per
// move, can undo any number of moves, and wins once every goal holds a box.

pub mod console_interface;
pub mod core;
pub mod level;
pub mod state_graph;

#[cfg(test)]
mod test;

pub use crate::core::{
    Board, BoardStatus, BoxId, Direction, EngineConfig, LevelError, Positions, RulesConfig, TileKind, UserAction,
    Vec2,
};
pub use crate::level::{load_level_file, parse_level, LevelDescription};
