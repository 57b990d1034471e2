mod description;
mod text_map;

use std::path::Path;

use tracing::debug;

use crate::core::LevelError;

pub use description::{
    symbol_for_tile, tile_from_symbol, LegacyLevelDescription, LevelDescription, LevelFile, LevelLayout,
    FLOOR_SYMBOL, GOAL_SYMBOL, MAX_LEVEL_TILES, WALL_SYMBOL,
};
pub use text_map::{parse_text_map, BOX_ON_GOAL_SYMBOL, BOX_SYMBOL, PLAYER_ON_GOAL_SYMBOL, PLAYER_SYMBOL};

/// Parses either JSON schema, or a text map when the content does not start with `{`.
pub fn parse_level(s: &str) -> Result<LevelDescription, LevelError> {
    if s.trim_start().starts_with('{') {
        LevelDescription::from_json_str(s)
    } else {
        parse_text_map(s)
    }
}

pub fn load_level_file(path: impl AsRef<Path>) -> Result<LevelDescription, LevelError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read level file");
    parse_level(&contents)
}
