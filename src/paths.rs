//! Resolution of the config file and data directory
//!
//! Precedence for both: command-line flag (or its environment variable),
//! then the config file, then the platform default from `dirs`.

use std::path::{Path, PathBuf};

use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};

/// Make a path absolute against the current directory
pub fn resolve_pathbuf(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| StockroomError::IoError {
        path: PathBuf::from("."),
        message: format!("current directory: {}", e),
    })?;
    Ok(cwd.join(path))
}

/// Config file to read: the explicit path, else the platform default
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => resolve_pathbuf(path),
        None => StockroomConfig::default_path().ok_or_else(|| StockroomError::Config {
            message: "No config directory on this platform; pass --config".to_string(),
        }),
    }
}

/// Directory holding the store
pub fn resolve_data_dir(explicit: Option<&Path>, config: &StockroomConfig) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return resolve_pathbuf(path);
    }
    if let Some(path) = &config.storage.data_dir {
        return resolve_pathbuf(path);
    }
    dirs::data_dir()
        .map(|dir| dir.join("stockroom"))
        .ok_or_else(|| StockroomError::Config {
            message: "No data directory on this platform; pass --data-dir".to_string(),
        })
}
