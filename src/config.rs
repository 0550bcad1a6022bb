//! Stockroom configuration management.
//!
//! Handles the configuration file at:
//! - Linux: ~/.config/stockroom/config.toml
//! - macOS: ~/Library/Application Support/stockroom/config.toml
//! - Windows: %APPDATA%\stockroom\config.toml
//!
//! A missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StockroomError};
use crate::filter::DEFAULT_PAGE_SIZE;
use crate::fs_utils;
use crate::predict::PredictionSettings;

/// Stockroom configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StockroomConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// List display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Low-stock prediction tunables
    #[serde(default)]
    pub prediction: PredictionSettings,

    /// Alert settings
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory holding store.json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Rows per page in `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NotificationConfig {
    /// Permission to send low-stock alerts
    #[serde(default)]
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl StockroomConfig {
    /// Platform config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stockroom").join("config.toml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StockroomError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| StockroomError::Config {
            message: format!("Failed to parse config {}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs_utils::atomic_write(path, &content).map_err(|e| StockroomError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| StockroomError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.display.page_size == 0 {
            return Err(StockroomError::Config {
                message: "display.page_size must be at least 1".to_string(),
            });
        }
        if !self.prediction.trend_factor.is_finite() || self.prediction.trend_factor < 1.0 {
            return Err(StockroomError::Config {
                message: "prediction.trend_factor must be a number >= 1".to_string(),
            });
        }
        Ok(())
    }
}
