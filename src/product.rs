//! Product record and validated field parsing
//!
//! `Product` is the only persisted entity. Its serialized form uses the
//! camelCase field names of the `products` key so existing data loads as-is.
//! User-supplied text (command arguments, CSV cells) goes through the
//! `parse_*` functions here, which return a typed value or a `FieldError`
//! naming the offending field.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unit price assumed for products with no price when computing value
pub const DEFAULT_UNIT_PRICE: f64 = 10.0;

/// A tracked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, assigned at creation; nil for records written without one
    #[serde(default)]
    pub id: Uuid,

    pub name: String,

    pub category: String,

    /// Unit price, `None` when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    pub quantity: i64,

    /// Reorder trigger level
    pub threshold: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Marked for bulk operations
    #[serde(default)]
    pub selected: bool,
}

impl Product {
    /// `quantity <= threshold`
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }

    /// Stock value, using `DEFAULT_UNIT_PRICE` when the price is unknown
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price.unwrap_or(DEFAULT_UNIT_PRICE)
    }

    /// Price for display, `N/A` when unknown
    pub fn display_price(&self) -> String {
        match self.price {
            Some(price) => format!("{}", price),
            None => "N/A".to_string(),
        }
    }

    /// First eight characters of the id
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Validated product fields, ready to become a `Product`
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
    pub quantity: i64,
    pub threshold: i64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProductDraft {
    /// Build a new product with a fresh id; a missing timestamp becomes `now`
    pub fn into_product(self, now: DateTime<Utc>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            threshold: self.threshold,
            last_updated: Some(self.last_updated.unwrap_or(now)),
            selected: false,
        }
    }
}

/// Raw product form input, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: Option<String>,
    pub quantity: String,
    pub threshold: String,
}

impl ProductForm {
    /// Validate every field, collecting all failures
    pub fn validate(&self) -> std::result::Result<ProductDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = parse_required(Field::Name, &self.name).map_err(|e| errors.push(e)).ok();
        let category = parse_required(Field::Category, &self.category)
            .map_err(|e| errors.push(e))
            .ok();
        let price = parse_price(self.price.as_deref().unwrap_or(""))
            .map_err(|e| errors.push(e))
            .ok()
            .flatten();
        let quantity = parse_integer(Field::Quantity, &self.quantity)
            .map_err(|e| errors.push(e))
            .ok();
        let threshold = parse_integer(Field::Threshold, &self.threshold)
            .map_err(|e| errors.push(e))
            .ok();

        match (name, category, quantity, threshold) {
            (Some(name), Some(category), Some(quantity), Some(threshold)) if errors.is_empty() => {
                Ok(ProductDraft {
                    name,
                    category,
                    price,
                    quantity,
                    threshold,
                    last_updated: None,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Product fields that accept user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Category,
    Price,
    Quantity,
    Threshold,
    LastUpdated,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Threshold => "threshold",
            Self::LastUpdated => "last_updated",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed to parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub value: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: Field, value: &str, reason: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} {}", self.field, self.reason)
        } else {
            write!(f, "{} '{}' {}", self.field, self.value, self.reason)
        }
    }
}

/// Non-empty text after trimming
pub fn parse_required(field: Field, raw: &str) -> std::result::Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "", "is required"));
    }
    Ok(trimmed.to_string())
}

/// Whole number, may be negative
pub fn parse_integer(field: Field, raw: &str) -> std::result::Result<i64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "", "is required"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| FieldError::new(field, trimmed, "is not a whole number"))
}

/// Optional non-negative price; empty input means unknown
pub fn parse_price(raw: &str) -> std::result::Result<Option<f64>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let price: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::new(Field::Price, trimmed, "is not a number"))?;
    if !price.is_finite() {
        return Err(FieldError::new(Field::Price, trimmed, "is not a finite number"));
    }
    if price < 0.0 {
        return Err(FieldError::new(Field::Price, trimmed, "must not be negative"));
    }
    Ok(Some(price))
}

/// Optional RFC 3339 timestamp; empty input means absent
pub fn parse_timestamp(raw: &str) -> std::result::Result<Option<DateTime<Utc>>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| FieldError::new(Field::LastUpdated, trimmed, "is not an RFC 3339 timestamp"))
}

#[cfg(test)]
pub(crate) fn sample(name: &str, category: &str, quantity: i64, threshold: i64) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: category.to_string(),
        price: None,
        quantity,
        threshold,
        last_updated: None,
        selected: false,
    }
}
