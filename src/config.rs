//! Editor settings
//!
//! Stored as RON in the platform config directory
//! (`~/.config/plank/editor.ron` on Linux). A missing or unreadable file
//! falls back to defaults; the editor never refuses to start over settings.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = "plank";
const CONFIG_FILE_NAME: &str = "editor.ron";

/// Error type for settings I/O
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("no config directory on this platform")]
    NoConfigDir,
}

/// User-tunable editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Placement snap in world units
    pub grid_size: f32,
    /// Seconds before the platform tool accepts another activation
    pub activation_rearm_secs: f64,
    /// Width of the palette column
    pub palette_width: f32,
    /// Width of the inspector column
    pub inspector_width: f32,
    /// Level opened on startup and used as the default save target
    pub last_level_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 32.0,
            activation_rearm_secs: 0.1,
            palette_width: 160.0,
            inspector_width: 220.0,
            last_level_path: None,
        }
    }
}

impl EditorConfig {
    /// Default location of the settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Read settings from a RON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: EditorConfig = ron::from_str(&contents)?;
        Ok(config.sanitized())
    }

    /// Write settings to a RON file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new().depth_limit(2);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::info!("No config directory, using default settings");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded settings from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.grid_size.is_finite() && self.grid_size >= 1.0) {
            self.grid_size = defaults.grid_size;
        }
        if !(self.activation_rearm_secs.is_finite() && self.activation_rearm_secs >= 0.0) {
            self.activation_rearm_secs = defaults.activation_rearm_secs;
        }
        if !(self.palette_width.is_finite() && self.palette_width >= 80.0) {
            self.palette_width = defaults.palette_width;
        }
        if !(self.inspector_width.is_finite() && self.inspector_width >= 120.0) {
            self.inspector_width = defaults.inspector_width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("editor.ron");

        let config = EditorConfig {
            grid_size: 16.0,
            last_level_path: Some(PathBuf::from("levels/intro.json")),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(EditorConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.ron");
        fs::write(&path, "(grid_size: 8.0)").unwrap();

        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config.grid_size, 8.0);
        assert_eq!(config.inspector_width, EditorConfig::default().inspector_width);
    }

    #[test]
    fn test_out_of_range_values_are_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.ron");
        fs::write(&path, "(grid_size: 0.0, activation_rearm_secs: -1.0)").unwrap();

        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.ron");
        fs::write(&path, "this is not ron").unwrap();

        assert!(matches!(EditorConfig::load_from(&path), Err(ConfigError::Parse(_))));
    }
}
