use crate::core::{LevelError, TileKind};
use crate::level::description::{symbol_for_tile, tile_from_symbol, LevelDescription, FLOOR_SYMBOL};

pub const PLAYER_SYMBOL: char = '@';
pub const PLAYER_ON_GOAL_SYMBOL: char = '+';
pub const BOX_SYMBOL: char = '$';
pub const BOX_ON_GOAL_SYMBOL: char = '*';

/// Parses a text map where entities are drawn on the grid:
/// `@` player, `+` player on goal, `$` box, `*` box on goal, plus the tile symbols.
/// Blank lines are skipped and short rows are padded with floor.
pub fn parse_text_map(s: &str) -> Result<LevelDescription, LevelError> {
    let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
    let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut grid = Vec::with_capacity(lines.len());
    let mut player_coords = None;
    let mut box_coords = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let mut tiles = String::with_capacity(max_width);
        for (column, symbol) in line.chars().enumerate() {
            let coords = [column as i32, row as i32];
            let tile = match symbol {
                ' ' => FLOOR_SYMBOL,
                PLAYER_SYMBOL | PLAYER_ON_GOAL_SYMBOL => {
                    if player_coords.replace(coords).is_some() {
                        return Err(LevelError::MultiplePlayers);
                    }
                    underlying_tile(symbol == PLAYER_ON_GOAL_SYMBOL)
                }
                BOX_SYMBOL | BOX_ON_GOAL_SYMBOL => {
                    box_coords.push(coords);
                    underlying_tile(symbol == BOX_ON_GOAL_SYMBOL)
                }
                other => {
                    tile_from_symbol(other).ok_or(LevelError::UnknownSymbol { symbol: other, column, row })?;
                    other
                }
            };
            tiles.push(tile);
        }
        while tiles.chars().count() < max_width {
            tiles.push(FLOOR_SYMBOL);
        }
        grid.push(tiles);
    }

    if player_coords.is_none() {
        return Err(LevelError::MissingPlayer);
    }

    Ok(LevelDescription {
        grid,
        player_coords,
        box_coords,
    })
}

fn underlying_tile(on_goal: bool) -> char {
    symbol_for_tile(if on_goal { TileKind::Goal } else { TileKind::Floor })
}
