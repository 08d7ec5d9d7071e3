//! Host settings (`settings.yaml`).
//!
//! Covers where shortcut data is stored, the storage slot name, the default
//! log level, and whether dispatch ignores key-presses while a text field has
//! focus.

use crate::defaults;
use crate::error::ConfigError;
use crate::storage::FileStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log level for the debug log.
///
/// `RUST_LOG` and the `--log-level` CLI flag take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings for hosting the shortcut registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory for slot files; `None` uses [`FileStore::default_dir`]
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Storage slot holding the entry set
    #[serde(default = "defaults::storage_key")]
    pub storage_key: String,

    /// Debug log verbosity
    #[serde(default)]
    pub log_level: LogLevel,

    /// Ignore key-presses while a text-entry element has focus
    #[serde(default = "defaults::bool_true")]
    pub suppress_in_text_fields: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_key: defaults::storage_key(),
            log_level: LogLevel::default(),
            suppress_in_text_fields: true,
        }
    }
}

impl Settings {
    /// Load settings from the default path, creating the file with defaults
    /// if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`, creating the file with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Settings path: {:?}", path);

        if path.exists() {
            let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
            let settings: Settings =
                serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
            Ok(settings)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save_to(path) {
                log::error!("Failed to save default settings: {}", e);
                return Err(e);
            }
            Ok(settings)
        }
    }

    /// Save settings to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        Self::config_dir().join("settings.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("erp-shortcuts")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("erp-shortcuts")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Build the file store these settings point at.
    pub fn file_store(&self) -> FileStore {
        match &self.storage_dir {
            Some(dir) => FileStore::new(dir.clone()),
            None => FileStore::open_default(),
        }
    }
}
