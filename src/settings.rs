//! Driver settings loaded from an optional JSON file.
//!
//! Every field is optional in the file; missing fields fall back to defaults.
//!
//! ```json
//! {
//!   "game": { "width": 10, "height": 20, "seed": 7 },
//!   "tick_ms": 16,
//!   "log_file": "blockfall.log",
//!   "log_filter": "blockfall_core=debug"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GameConfig;
use crate::types::TICK_MS;

/// Default `tracing` filter when logging to a file
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    /// Interval between engine ticks
    pub tick_ms: u32,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: TICK_MS,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(text).context("parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("load settings from {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        self.game.validate().context("invalid game config")?;
        Ok(())
    }
}
