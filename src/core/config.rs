//! Engine configuration, loaded from TOML.
//!
//! ```toml
//! [rules]
//! moves_after_win = false
//! undo_after_win = true
//!
//! [log]
//! filter = "SokobanEngine=debug"
//! ```
//!
//! Every field is optional; a missing file is usually handled with
//! `EngineConfig::load(path).unwrap_or_default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// What the board accepts once every goal is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub moves_after_win: bool,
    #[serde(default = "default_true")]
    pub undo_after_win: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_true() -> bool {
    true
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            moves_after_win: true,
            undo_after_win: true,
        }
    }
}

impl RulesConfig {
    /// Freezes the board once it is won.
    pub fn locked_after_win() -> Self {
        RulesConfig {
            moves_after_win: false,
            undo_after_win: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { filter: default_filter() }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}
