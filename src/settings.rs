use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};
use crate::error::GameError;

const APP_DIR_NAME: &str = "console-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional overrides read from the settings file or the command line.
///
/// Unset fields fall back to the next layer: command line, then file, then
/// built-in defaults.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows: Option<u16>,
    pub cols: Option<u16>,
    pub seed: Option<u64>,
    pub color: Option<bool>,
}

impl Settings {
    /// Returns `self` with every field set in `overrides` replaced.
    #[must_use]
    pub fn overlaid_with(self, overrides: Self) -> Self {
        Self {
            rows: overrides.rows.or(self.rows),
            cols: overrides.cols.or(self.cols),
            seed: overrides.seed.or(self.seed),
            color: overrides.color.or(self.color),
        }
    }

    #[must_use]
    pub fn rows(self) -> u16 {
        self.rows.unwrap_or(DEFAULT_GRID_ROWS)
    }

    #[must_use]
    pub fn cols(self) -> u16 {
        self.cols.unwrap_or(DEFAULT_GRID_COLS)
    }

    #[must_use]
    pub fn color(self) -> bool {
        self.color.unwrap_or(false)
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns defaults when the file does not exist. Returns `Err` when it exists
/// but cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<Settings, GameError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings file at {}", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw).map_err(|source| GameError::Config {
        path: path.to_path_buf(),
        source,
    })
}
