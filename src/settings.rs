//! Game settings and preferences
//!
//! Loaded from a JSON file; every field is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_PLAYER_NAME, FPS, LEADERBOARD_DISPLAY};
use crate::highscores::LeaderboardFormat;
use crate::tuning::{Tuning, Variant};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Balance preset
    pub variant: Variant,
    /// Full balance sheet replacing the preset, if given
    pub tuning: Option<Tuning>,

    // === Session ===
    /// Ask for a name before each run
    pub prompt_name: bool,
    /// Name used when not prompting
    pub player_name: String,
    /// RNG seed; None picks one from the clock
    pub seed: Option<u64>,
    /// Frame rate cap
    pub fps: u32,

    // === Leaderboard ===
    pub leaderboard_path: PathBuf,
    pub leaderboard_format: LeaderboardFormat,
    /// Rows shown on the game over screen
    pub leaderboard_display: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::Dino,
            tuning: None,

            prompt_name: false,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            seed: None,
            fps: FPS,

            leaderboard_path: PathBuf::from("ranking.csv"),
            leaderboard_format: LeaderboardFormat::Ranked,
            leaderboard_display: LEADERBOARD_DISPLAY,
        }
    }
}

impl Settings {
    /// Defaults for a variant (Hugo prompts for a name)
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            prompt_name: variant == Variant::Hugo,
            ..Self::default()
        }
    }

    /// Effective balance: explicit override, else the variant preset
    pub fn tuning(&self) -> Tuning {
        self.tuning.clone().unwrap_or_else(|| self.variant.tuning())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from disk; a missing file gives defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}
