use crate::core::bounded_grid::BoundedGrid;
use crate::core::{TileKind, Vec2};

/// Static tile layout of a level. Never changes after construction.
#[derive(Clone, Debug)]
pub struct Grid {
    tiles: BoundedGrid<TileKind>,
    goals: Vec<Vec2>,
}

impl Grid {
    pub fn new(tiles: BoundedGrid<TileKind>) -> Grid {
        let goals = tiles
            .iter()
            .filter(|&(_, &kind)| kind == TileKind::Goal)
            .map(|(pos, _)| pos)
            .collect();
        Grid { tiles, goals }
    }

    pub fn width(&self) -> i32 {
        self.tiles.size().extent.x
    }

    pub fn height(&self) -> i32 {
        self.tiles.size().extent.y
    }

    pub fn in_bounds(&self, pos: &Vec2) -> bool {
        self.tiles.contains(pos)
    }

    /// `None` when `pos` lies outside the grid.
    pub fn kind_at(&self, pos: &Vec2) -> Option<TileKind> {
        self.tiles.get(pos).copied()
    }

    pub fn goals(&self) -> &[Vec2] {
        &self.goals
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Vec2, TileKind)> {
        self.tiles.iter().map(|(pos, &kind)| (pos, kind))
    }
}
