//! User configuration: thresholds, station offset and the window table.
//!
//! Stored as TOML at `$SPOTCHECK_CONFIG` or `<config dir>/spotcheck/config.toml`.
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::report::window::{default_specs, WindowSpec, WindowTable};
use crate::schedule::Thresholds;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SPOTCHECK_CONFIG";

const MIN_OFFSET_HOURS: i32 = -12;
const MAX_OFFSET_HOURS: i32 = 14;

/// Station settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Fixed offset from UTC used for all local times (no DST)
    pub utc_offset_hours: i32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self { utc_offset_hours: 8 }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub station: StationConfig,
    pub windows: Vec<WindowSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            station: StationConfig::default(),
            windows: default_specs(),
        }
    }
}

/// Validated settings the pipeline runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub offset: FixedOffset,
    pub windows: WindowTable,
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("spotcheck").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from a specific file, falling back to defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.settings()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to the default location, creating the directory.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_error)
    }

    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        let hours = self.station.utc_offset_hours;
        if !(MIN_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
            return Err(ConfigError::InvalidOffset { hours });
        }
        FixedOffset::east_opt(hours * 3600).ok_or(ConfigError::InvalidOffset { hours })
    }

    /// Thresholds, checked for `lead_in <= ad <= special`.
    pub fn thresholds(&self) -> Result<Thresholds, ConfigError> {
        let t = &self.thresholds;
        if t.lead_in_secs > t.ad_secs {
            return Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "lead_in_secs ({}) is above ad_secs ({})",
                    t.lead_in_secs, t.ad_secs
                ),
            });
        }
        if t.ad_secs > t.special_secs {
            return Err(ConfigError::InvalidThresholds {
                reason: format!(
                    "ad_secs ({}) is above special_secs ({})",
                    t.ad_secs, t.special_secs
                ),
            });
        }
        Ok(t.clone())
    }

    /// Validate and resolve into pipeline settings.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            thresholds: self.thresholds()?,
            offset: self.offset()?,
            windows: WindowTable::from_specs(&self.windows)?,
        })
    }
}
