//! Persistent product store
//!
//! The collection lives under the `"products"` key of a string key-value
//! store, serialized as a JSON array. The dark-mode preference sits beside it
//! under `"darkMode"` as `"true"`/`"false"`.
//!
//! `Inventory` owns the collection. Every mutating operation saves before it
//! returns, so storage always reflects the last completed operation.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, StockroomError};
use crate::fs_utils;
use crate::product::{Product, ProductDraft};

/// Key holding the serialized product array
pub const PRODUCTS_KEY: &str = "products";

/// Key holding the dark-mode flag as text
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name of the store inside the data directory
pub const STORE_FILE: &str = "store.json";

/// Shortest id prefix accepted by `Inventory::resolve`
pub const MIN_ID_PREFIX: usize = 4;

/// String key-value storage, modelled on browser local storage
pub trait KeyValueStore {
    /// Read a key, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// All keys in one JSON object file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store file inside `data_dir` (created on first write)
    pub fn open(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StockroomError::IoError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        match serde_json::from_str(&content) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(
                    "Store file {} is not a JSON object of strings, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&map).map_err(|e| StockroomError::Store {
            message: format!("Failed to serialize store: {}", e),
        })?;

        fs_utils::atomic_write(&self.path, &content).map_err(|e| StockroomError::IoError {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Result of a bulk delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkDeleteOutcome {
    /// The confirmation was declined; nothing changed
    Declined { selected: usize },
    /// Selected products were removed
    Deleted { removed: usize },
}

/// The product collection together with its backing store
#[derive(Debug)]
pub struct Inventory<S: KeyValueStore> {
    store: S,
    products: Vec<Product>,
}

impl<S: KeyValueStore> Inventory<S> {
    /// Load the persisted collection.
    ///
    /// Absent or non-array data yields an empty collection. Individual
    /// records that fail to parse are dropped with a warning. Records stored
    /// without an id get one here and are saved immediately, so the id stays
    /// valid for later commands.
    pub fn load(store: S) -> Result<Self> {
        let records = match store.get(PRODUCTS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Stored products are malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
        };

        let mut products = Vec::with_capacity(records.len());
        let mut dropped = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            let label = record["name"].as_str().unwrap_or("<unnamed>").to_string();
            match serde_json::from_value::<Product>(record) {
                Ok(product) => products.push(product),
                Err(e) => dropped.push(format!("#{} {} ({})", index + 1, label, e)),
            }
        }
        if !dropped.is_empty() {
            tracing::warn!(
                "Dropped {} malformed stored products: {}",
                dropped.len(),
                dropped.join("; ")
            );
        }

        let mut assigned = 0;
        for product in products.iter_mut().filter(|p| p.id.is_nil()) {
            product.id = Uuid::new_v4();
            assigned += 1;
        }

        tracing::debug!("Loaded {} products", products.len());
        let mut inventory = Self { store, products };
        if assigned > 0 {
            tracing::info!("Assigned ids to {} stored products", assigned);
            inventory.save()?;
        }
        Ok(inventory)
    }

    /// Products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist the collection
    pub fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.products).map_err(|e| StockroomError::Store {
            message: format!("Failed to serialize products: {}", e),
        })?;
        self.store.set(PRODUCTS_KEY, &raw)
    }

    /// Append a new product
    pub fn add(&mut self, draft: ProductDraft, now: DateTime<Utc>) -> Result<Product> {
        let product = draft.into_product(now);
        self.products.push(product.clone());
        self.save()?;
        tracing::info!("Added product {} ({})", product.name, product.short_id());
        Ok(product)
    }

    /// Replace a product's fields in place, keeping its id and position.
    ///
    /// The timestamp is refreshed to `now` unless the draft carries one.
    pub fn update(&mut self, id: Uuid, draft: ProductDraft, now: DateTime<Utc>) -> Result<Product> {
        let product = self.get_mut(id)?;
        product.name = draft.name;
        product.category = draft.category;
        product.price = draft.price;
        product.quantity = draft.quantity;
        product.threshold = draft.threshold;
        product.last_updated = Some(draft.last_updated.unwrap_or(now));
        let updated = product.clone();
        self.save()?;
        tracing::info!("Updated product {} ({})", updated.name, updated.short_id());
        Ok(updated)
    }

    /// Remove one product
    pub fn remove(&mut self, id: Uuid) -> Result<Product> {
        let index = self.position(id).ok_or_else(|| StockroomError::ProductNotFound {
            query: id.to_string(),
        })?;
        let removed = self.products.remove(index);
        self.save()?;
        tracing::info!("Removed product {} ({})", removed.name, removed.short_id());
        Ok(removed)
    }

    /// Flip the `selected` flag, returning the new value
    pub fn toggle_select(&mut self, id: Uuid) -> Result<bool> {
        let product = self.get_mut(id)?;
        product.selected = !product.selected;
        let selected = product.selected;
        self.save()?;
        Ok(selected)
    }

    pub fn selected_count(&self) -> usize {
        self.products.iter().filter(|p| p.selected).count()
    }

    /// Delete every selected product once `confirm` agrees.
    ///
    /// `confirm` receives the number of selected products. With nothing
    /// selected this fails with `NothingSelected` and `confirm` is not called.
    pub fn bulk_delete<F>(&mut self, confirm: F) -> Result<BulkDeleteOutcome>
    where
        F: FnOnce(usize) -> bool,
    {
        let selected = self.selected_count();
        if selected == 0 {
            return Err(StockroomError::NothingSelected);
        }

        if !confirm(selected) {
            tracing::debug!("Bulk delete of {} products declined", selected);
            return Ok(BulkDeleteOutcome::Declined { selected });
        }

        self.products.retain(|p| !p.selected);
        self.save()?;
        tracing::info!("Bulk deleted {} products", selected);
        Ok(BulkDeleteOutcome::Deleted { removed: selected })
    }

    /// Append imported products in order and save once
    pub fn append(&mut self, products: Vec<Product>) -> Result<usize> {
        let count = products.len();
        self.products.extend(products);
        self.save()?;
        tracing::info!("Appended {} products", count);
        Ok(count)
    }

    /// Absolute position of a product
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StockroomError::ProductNotFound {
                query: id.to_string(),
            })
    }

    /// Resolve a full id or a unique prefix of one
    pub fn resolve(&self, query: &str) -> Result<Uuid> {
        let needle = query.trim().to_lowercase();

        if let Ok(id) = Uuid::parse_str(&needle) {
            return self
                .get(id)
                .map(|p| p.id)
                .ok_or_else(|| StockroomError::ProductNotFound {
                    query: query.to_string(),
                });
        }

        if needle.len() < MIN_ID_PREFIX {
            return Err(StockroomError::ProductNotFound {
                query: query.to_string(),
            });
        }

        let matches: Vec<Uuid> = self
            .products
            .iter()
            .filter(|p| {
                p.id.simple().to_string().starts_with(&needle)
                    || p.id.hyphenated().to_string().starts_with(&needle)
            })
            .map(|p| p.id)
            .collect();

        match matches.as_slice() {
            [] => Err(StockroomError::ProductNotFound {
                query: query.to_string(),
            }),
            [id] => Ok(*id),
            _ => Err(StockroomError::AmbiguousId {
                query: query.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Stored dark-mode preference, off unless the stored text is `"true"`
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self.store.get(DARK_MODE_KEY)?.as_deref() == Some("true"))
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.store
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }
}
