//! Display settings and their persistence
//!
//! [`DisplaySettings`] controls how the text board is drawn. Settings are
//! stored as JSON in the user's configuration directory, e.g.
//! `~/.config/xfchess/settings.json`, or at an explicit path.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing or unreadable file falls back to
//! defaults with a warning. [`read_settings`] and [`save_settings`] return
//! [`CoreResult`] for callers that want to react to failures.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::CoreResult;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// How the board is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Draw pieces with Unicode chess glyphs instead of ASCII letters
    pub unicode_pieces: bool,
    /// Print file letters and rank numbers around the board
    pub show_coordinates: bool,
    /// Draw the board from Black's side
    pub flip_board: bool,
    /// Mark the selected square and its legal destinations
    pub show_highlights: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unicode_pieces: true,
            show_coordinates: true,
            flip_board: false,
            show_highlights: true,
        }
    }
}

/// Resolve the default settings file path
///
/// Falls back to a local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "XFChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse a settings file
pub fn read_settings(path: &Path) -> CoreResult<DisplaySettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings from `path`, or the default location when `None`
pub fn load_settings(path: Option<&Path>) -> DisplaySettings {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);

    if !settings_path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", settings_path);
        return DisplaySettings::default();
    }

    match read_settings(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            DisplaySettings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the parent directory if needed
pub fn save_settings(settings: &DisplaySettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
