//! CLI argument definitions using clap with subcommand architecture
//!
//! Each subcommand maps to one handler in `commands/`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::product::ProductForm;

/// Local inventory tracker with low-stock predictions
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Track product stock levels, spot low stock early, import/export CSV")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the inventory store
    #[arg(long, value_name = "DIR", env = "STOCKROOM_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE", env = "STOCKROOM_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

// ============================================
// Main Commands Enum
// ============================================

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    Add(ProductArgs),

    /// Replace a product's fields
    Edit(EditArgs),

    /// Remove a product
    #[command(visible_alias = "rm")]
    Remove(TargetArgs),

    /// Toggle a product's selection for bulk operations
    Select(TargetArgs),

    /// Delete every selected product
    BulkDelete(BulkDeleteArgs),

    /// Show the inventory with predictions and reorder advisories
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// List distinct categories
    Categories,

    /// Append products from a CSV file
    Import(ImportArgs),

    /// Write all products as CSV
    Export(ExportArgs),

    /// Category charts and summary statistics
    Analytics,

    /// Show or change the color theme
    Theme(ThemeArgs),

    /// Show or initialize the configuration
    Config(ConfigArgs),
}

// ============================================
// Product Subcommands
// ============================================

/// Product fields, validated after parsing
#[derive(Args, Debug, Clone)]
pub struct ProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Category label
    #[arg(long)]
    pub category: String,

    /// Unit price (omit when unknown)
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Units in stock
    #[arg(long, allow_hyphen_values = true)]
    pub quantity: String,

    /// Reorder level
    #[arg(long, allow_hyphen_values = true)]
    pub threshold: String,

    /// Print analytics charts after the change
    #[arg(long)]
    pub charts: bool,
}

impl ProductArgs {
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            quantity: self.quantity.clone(),
            threshold: self.threshold.clone(),
        }
    }
}

/// Arguments for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Product id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: ProductArgs,
}

/// A single product target
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Product id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print analytics charts after the change
    #[arg(long)]
    pub charts: bool,
}

/// Arguments for the bulk-delete command
#[derive(Args, Debug)]
pub struct BulkDeleteArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print analytics charts after the change
    #[arg(long)]
    pub charts: bool,
}

// ============================================
// List Subcommand
// ============================================

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only products whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only products in this category (exact match)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Only products at or below their threshold
    #[arg(long)]
    pub low_stock: bool,

    /// Page to show (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Rows per page (defaults to display.page_size from the config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,
}

// ============================================
// Import / Export Subcommands
// ============================================

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file to read
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print analytics charts after the change
    #[arg(long)]
    pub charts: bool,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// ============================================
// Theme / Config Subcommands
// ============================================

/// Arguments for the theme command
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value = "show")]
    pub action: ThemeAction,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Use the dark palette
    Dark,
    /// Use the light palette
    Light,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub operation: ConfigOperation,
}

#[derive(Subcommand, Debug)]
pub enum ConfigOperation {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================
// Shared Types
// ============================================

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with visual formatting (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// TOON (Token-Oriented Object Notation) - compact structured output
    Toon,
    /// JSON - standard JSON output for machine parsing
    Json,
}
