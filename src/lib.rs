//! stockroom: local inventory tracker
//!
//! Keeps a list of products (quantity, reorder threshold, optional price) in
//! a local key-value store and derives everything else from it on demand:
//! filtered and paginated listings, low-stock predictions with reorder
//! advisories, per-category analytics with text charts, and CSV
//! import/export.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use stockroom::{render, Filter, Inventory, MemoryStore, PredictionSettings, ProductForm};
//!
//! let mut inventory = Inventory::load(MemoryStore::new())?;
//! let draft = ProductForm {
//!     name: "Widget".into(),
//!     category: "Tools".into(),
//!     price: Some("5".into()),
//!     quantity: "2".into(),
//!     threshold: "5".into(),
//! }
//! .validate()
//! .expect("valid form");
//! inventory.add(draft, Utc::now())?;
//!
//! let view = render(
//!     inventory.products(),
//!     &Filter::default(),
//!     1,
//!     10,
//!     Utc::now(),
//!     &PredictionSettings::default(),
//! );
//! assert!(view.rows[0].low_stock);
//! assert_eq!(view.advisories, vec!["Automated reorder initiated for Widget."]);
//! # Ok::<(), stockroom::StockroomError>(())
//! ```

pub mod alerts;
pub mod analytics;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod fs_utils;
pub mod paths;
pub mod predict;
pub mod product;
pub mod render;
pub mod store;
pub mod theme;
pub mod transfer;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::StockroomConfig;
pub use error::{Result, StockroomError};
pub use filter::{filter, paginate, Filter, Page};
pub use predict::{assess, days_since_update, Prediction, PredictionSettings};
pub use product::{FieldError, Product, ProductDraft, ProductForm};
pub use render::{render, InventoryView};
pub use store::{FileStore, Inventory, KeyValueStore, MemoryStore};
pub use transfer::{export_csv, parse_csv, ImportReport};
