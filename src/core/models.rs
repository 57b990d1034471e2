use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileKind {
    Floor,
    Wall,
    Goal,
}

impl TileKind {
    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

/// Grid coordinate. `x` is the column, `y` the row, growing downward.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Restart,
}

/// Index of a box in the board's entity arena. Stable for the board's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoxId(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Player,
    Box(BoxId),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LegalMove {
    Step,
    Push(BoxId),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BoardStatus {
    #[default]
    Ready,
    InPlay,
    Won,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HistoryEntry {
    pub direction: Direction,
    pub pushed: Option<BoxId>,
    /// Status the board held before this move was applied.
    pub status_before: BoardStatus,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Positions {
    pub player: Vec2,
    pub boxes: Vec<(BoxId, Vec2)>,
}
