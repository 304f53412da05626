// src/config/settings.rs
use std::fs;
use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const APP_DIR: &str = "feynman-assistant";
const SETTINGS_FILE: &str = "settings.ron";
const ENV_PREFIX: &str = "FEYNMAN";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Window and logging preferences. Session state is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    pub dark_mode: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1024.0,
            window_height: 768.0,
            dark_mode: true,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// `<config dir>/feynman-assistant/settings.ron`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Loads from the default location, writing a default file first if
    /// there is none yet.
    pub fn load() -> Result<Self, SettingsError> {
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            Self::default().save(&path)?;
        }

        Self::load_from(&path)
    }

    /// Defaults, then the RON file at `path` if present, then `FEYNMAN_*`
    /// environment variables.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("window_width", defaults.window_width as f64)?
            .set_default("window_height", defaults.window_height as f64)?
            .set_default("dark_mode", defaults.dark_mode)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(File::from(path).format(FileFormat::Ron).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let settings: Self = config.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, text)?;
        Ok(())
    }
}
