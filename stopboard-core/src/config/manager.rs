//! Settings persistence

use std::path::{Path, PathBuf};

use super::BoardSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::trace_operation;
use crate::tracing::span_names;

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "STOPBOARD_CONFIG_DIR";

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`BoardSettings`] in a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory.
    ///
    /// Uses `$STOPBOARD_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `stopboard`.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn new() -> ConfigResult<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(Self::with_config_dir(PathBuf::from(dir)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("stopboard")))
    }

    /// Creates a manager for an explicit directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the settings file path
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_settings(&self) -> ConfigResult<BoardSettings> {
        let path = self.settings_path();
        let _span = trace_operation!(span_names::CONFIG_LOAD, path = %path.display()).entered();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file, using defaults");
                return Ok(BoardSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        BoardSettings::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse { path, reason },
            other => other,
        })
    }

    /// Saves settings, creating the configuration directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or cannot be written.
    pub fn save_settings(&self, settings: &BoardSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let _span = trace_operation!(span_names::CONFIG_SAVE, path = %path.display()).entered();

        settings.validate()?;
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::write(&path, settings.to_toml()?)?;
        tracing::info!("Settings saved");
        Ok(())
    }
}
