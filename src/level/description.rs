use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::grid::Grid;
use crate::core::{LevelError, TileKind, Vec2};

pub const FLOOR_SYMBOL: char = '.';
pub const WALL_SYMBOL: char = '#';
pub const GOAL_SYMBOL: char = 'x';

/// Largest number of tiles a level may have.
pub const MAX_LEVEL_TILES: usize = 1 << 16;

/// Level data as produced by the editor: an inline grid plus entity coordinates,
/// each `[column, row]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescription {
    pub grid: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_coords: Option<[i32; 2]>,
    #[serde(default)]
    pub box_coords: Vec<[i32; 2]>,
}

/// Older editor output: parallel coordinate lists, each `[row, column]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLevelDescription {
    /// `[width, height]`
    pub grid_dimensions: [i32; 2],
    #[serde(default)]
    pub player_coords: Option<[i32; 2]>,
    #[serde(default)]
    pub wall_coords: Vec<[i32; 2]>,
    #[serde(default)]
    pub box_coords: Vec<[i32; 2]>,
    #[serde(default)]
    pub gtile_coords: Vec<[i32; 2]>,
}

#[derive(Clone, Debug)]
pub enum LevelFile {
    Inline(LevelDescription),
    Legacy(LegacyLevelDescription),
}

/// A validated level, ready to be placed on a board. Only `LevelDescription::to_layout`
/// builds one.
#[derive(Clone, Debug)]
pub struct LevelLayout {
    pub(crate) grid: Grid,
    pub(crate) player: Vec2,
    pub(crate) boxes: Vec<Vec2>,
}

impl LevelLayout {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn boxes(&self) -> &[Vec2] {
        &self.boxes
    }
}

fn check_size(width: usize, height: usize) -> Result<(), LevelError> {
    match width.checked_mul(height) {
        Some(tiles) if tiles <= MAX_LEVEL_TILES => Ok(()),
        _ => Err(LevelError::TooLarge { width, height, max: MAX_LEVEL_TILES }),
    }
}

pub fn tile_from_symbol(symbol: char) -> Option<TileKind> {
    match symbol {
        FLOOR_SYMBOL => Some(TileKind::Floor),
        WALL_SYMBOL => Some(TileKind::Wall),
        GOAL_SYMBOL => Some(TileKind::Goal),
        _ => None,
    }
}

pub fn symbol_for_tile(kind: TileKind) -> char {
    match kind {
        TileKind::Floor => FLOOR_SYMBOL,
        TileKind::Wall => WALL_SYMBOL,
        TileKind::Goal => GOAL_SYMBOL,
    }
}

impl LevelFile {
    /// Objects with `grid_dimensions` and no `grid` are legacy files. Everything else is
    /// read as an inline level, so its errors name the inline fields.
    pub fn from_value(value: serde_json::Value) -> Result<LevelFile, serde_json::Error> {
        if value.get("grid").is_none() && value.get("grid_dimensions").is_some() {
            serde_json::from_value(value).map(LevelFile::Legacy)
        } else {
            serde_json::from_value(value).map(LevelFile::Inline)
        }
    }

    pub fn into_description(self) -> Result<LevelDescription, LevelError> {
        match self {
            LevelFile::Inline(description) => Ok(description),
            LevelFile::Legacy(legacy) => LevelDescription::try_from(legacy),
        }
    }
}

impl LevelDescription {
    pub fn from_json_str(s: &str) -> Result<LevelDescription, LevelError> {
        let value: serde_json::Value = serde_json::from_str(s)?;
        LevelFile::from_value(value)?.into_description()
    }

    pub fn to_json_string(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the description and builds the tile grid.
    pub fn to_layout(&self) -> Result<LevelLayout, LevelError> {
        let width = self.grid.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(LevelError::EmptyGrid);
        }
        let height = self.grid.len();
        check_size(width, height)?;

        let mut tiles = BoundedGrid::new_with_size(Vec2::new(width as i32, height as i32), TileKind::Floor);
        for (row, line) in self.grid.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow { row, expected: width, found });
            }
            for (column, symbol) in line.chars().enumerate() {
                let kind = tile_from_symbol(symbol)
                    .ok_or(LevelError::UnknownSymbol { symbol, column, row })?;
                tiles[&Vec2::new(column as i32, row as i32)] = kind;
            }
        }
        let grid = Grid::new(tiles);

        let player: Vec2 = self.player_coords.ok_or(LevelError::MissingPlayer)?.into();
        let boxes: Vec<Vec2> = self.box_coords.iter().map(|&c| c.into()).collect();

        let mut occupied = HashSet::new();
        let placements = std::iter::once(("player", player)).chain(boxes.iter().map(|&b| ("box", b)));
        for (what, at) in placements {
            match grid.kind_at(&at) {
                None => {
                    return Err(LevelError::OutOfBounds {
                        what,
                        at,
                        width: grid.width(),
                        height: grid.height(),
                    });
                }
                Some(TileKind::Wall) => return Err(LevelError::OnWall { what, at }),
                Some(_) => {}
            }
            if !occupied.insert(at) {
                return Err(LevelError::Overlapping { at });
            }
        }

        Ok(LevelLayout { grid, player, boxes })
    }
}

impl TryFrom<LegacyLevelDescription> for LevelDescription {
    type Error = LevelError;

    fn try_from(legacy: LegacyLevelDescription) -> Result<Self, Self::Error> {
        let [width, height] = legacy.grid_dimensions;
        if width <= 0 || height <= 0 {
            return Err(LevelError::EmptyGrid);
        }
        check_size(width as usize, height as usize)?;
        let mut rows: Vec<Vec<char>> = vec![vec![FLOOR_SYMBOL; width as usize]; height as usize];

        let mut paint = |what: &'static str, coords: &[[i32; 2]], symbol: char| {
            for &[row, column] in coords {
                let at = Vec2::new(column, row);
                if column < 0 || row < 0 || column >= width || row >= height {
                    return Err(LevelError::OutOfBounds { what, at, width, height });
                }
                rows[row as usize][column as usize] = symbol;
            }
            Ok(())
        };
        paint("wall", &legacy.wall_coords, WALL_SYMBOL)?;
        paint("goal", &legacy.gtile_coords, GOAL_SYMBOL)?;

        Ok(LevelDescription {
            grid: rows.into_iter().map(|row| row.into_iter().collect()).collect(),
            player_coords: legacy.player_coords.map(|[row, column]| [column, row]),
            box_coords: legacy.box_coords.iter().map(|&[row, column]| [column, row]).collect(),
        })
    }
}
