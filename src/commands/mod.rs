//! Command modules for the stockroom CLI
//!
//! ## Architecture
//!
//! - `product` - add, edit, remove, select, bulk-delete
//! - `list` - filtered/paginated inventory view, categories
//! - `transfer` - CSV import and export
//! - `analytics` - charts and summary statistics
//! - `settings` - theme and configuration
//!
//! All command handlers take their `Args` struct from `cli.rs` and a shared
//! `CommandContext`, and return the text to print on stdout.

pub mod analytics;
pub mod list;
pub mod product;
pub mod settings;
pub mod transfer;

pub use analytics::run_analytics;
pub use list::{run_categories, run_list};
pub use product::{run_add, run_bulk_delete, run_edit, run_remove, run_select};
pub use settings::{run_config, run_theme};
pub use transfer::{run_export, run_import};

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::cli::OutputFormat;
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::paths;
use crate::store::{FileStore, Inventory, KeyValueStore};
use crate::theme::Theme;

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text, toon, or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Effective configuration
    pub config: StockroomConfig,
    /// Where the configuration was (or would be) read from
    pub config_path: PathBuf,
    /// `--data-dir` / `STOCKROOM_DATA_DIR`, if given
    pub data_dir_override: Option<PathBuf>,
    /// Clock reading used for timestamps and predictions
    pub now: DateTime<Utc>,
}

impl CommandContext {
    pub fn new(
        format: OutputFormat,
        verbose: bool,
        config: StockroomConfig,
        config_path: PathBuf,
        data_dir_override: Option<PathBuf>,
    ) -> Self {
        Self {
            format,
            verbose,
            config,
            config_path,
            data_dir_override,
            now: Utc::now(),
        }
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> Result<PathBuf> {
        paths::resolve_data_dir(self.data_dir_override.as_deref(), &self.config)
    }

    /// Load the inventory from the file store
    pub fn open_inventory(&self) -> Result<Inventory<FileStore>> {
        let data_dir = self.data_dir()?;
        tracing::debug!("Using data directory {}", data_dir.display());
        Inventory::load(FileStore::open(&data_dir))
    }
}

/// Text palette for the stored dark-mode preference
pub fn theme_for<S: KeyValueStore>(inventory: &Inventory<S>) -> Result<Theme> {
    Ok(Theme::new(inventory.dark_mode()?))
}

/// Encode a JSON value as TOON using the rtoon library
pub fn encode_toon(value: &serde_json::Value) -> String {
    rtoon::encode_default(value).unwrap_or_else(|e| format!("TOON encoding error: {}", e))
}

/// Render `json_value` in the requested format; `text` builds the human-readable form
pub fn format_output<F>(ctx: &CommandContext, json_value: &serde_json::Value, text: F) -> String
where
    F: FnOnce() -> String,
{
    match ctx.format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(json_value).unwrap_or_default();
            out.push('\n');
            out
        }
        OutputFormat::Toon => {
            let mut out = encode_toon(json_value);
            out.push('\n');
            out
        }
        OutputFormat::Text => text(),
    }
}

/// Boxed section heading used by text output
pub fn banner(title: &str) -> String {
    let rule = "═".repeat(55);
    format!("{}\n  {}\n{}\n\n", rule, title, rule)
}
