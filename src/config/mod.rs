//! Persistent user preferences for the SpendChart shell.
//!
//! Ledger figures are never written here; they live only for the session.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::app_data_dir;

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Unknown setting `{0}`")]
    UnknownKey(String),

    #[error("Invalid value `{value}` for `{key}` (expected true/false)")]
    InvalidValue { key: String, value: String },
}

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub screen_reader_mode: bool,
    #[serde(default)]
    pub quiet_mode: bool,
    #[serde(default = "Config::default_true")]
    pub confirm_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_color_enabled: true,
            screen_reader_mode: false,
            quiet_mode: false,
            confirm_exit: true,
        }
    }
}

impl Config {
    pub const KEYS: &'static [&'static str] = &[
        "ui_color_enabled",
        "screen_reader_mode",
        "quiet_mode",
        "confirm_exit",
    ];

    fn default_true() -> bool {
        true
    }

    /// Updates a boolean setting by name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let flag = parse_flag(value).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        match key.to_ascii_lowercase().as_str() {
            "ui_color_enabled" | "color" => self.ui_color_enabled = flag,
            "screen_reader_mode" | "screen_reader" => self.screen_reader_mode = flag,
            "quiet_mode" | "quiet" => self.quiet_mode = flag,
            "confirm_exit" => self.confirm_exit = flag,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Key/value rows in display order.
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("ui_color_enabled", self.ui_color_enabled),
            ("screen_reader_mode", self.screen_reader_mode),
            ("quiet_mode", self.quiet_mode),
            ("confirm_exit", self.confirm_exit),
        ]
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::debug!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
