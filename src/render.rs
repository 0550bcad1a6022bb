//! Inventory view construction
//!
//! `render` turns the collection and the active filter into an
//! `InventoryView`: the visible rows, the predictions and reorder advisories
//! for those rows, and the pagination controls. It performs no I/O; alerts
//! for the at-risk rows are dispatched separately by `alerts::dispatch`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::filter::{self, Filter};
use crate::predict::{self, Prediction, PredictionSettings};
use crate::product::Product;

/// A visible inventory row
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: Uuid,
    /// Position in the full collection
    pub position: usize,
    pub product: Product,
    pub low_stock: bool,
}

/// Pagination controls, present only when there is more than one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Everything the list screen shows
#[derive(Debug, Clone, Serialize)]
pub struct InventoryView {
    pub filter: Filter,
    pub rows: Vec<Row>,
    pub predictions: Vec<Prediction>,
    pub advisories: Vec<String>,
    pub pagination: Option<Pagination>,
    /// Products matching the filter, across all pages
    pub total_matches: usize,
    pub page: usize,
}

/// Build the view for one page of the filtered collection
pub fn render(
    products: &[Product],
    filter: &Filter,
    page: usize,
    page_size: usize,
    now: DateTime<Utc>,
    settings: &PredictionSettings,
) -> InventoryView {
    let matches = filter::filter(products, filter);
    let page = filter::paginate(&matches, page, page_size);

    let rows: Vec<Row> = page
        .items
        .iter()
        .map(|item| Row {
            id: item.product.id,
            position: item.position,
            product: item.product.clone(),
            low_stock: item.product.is_low_stock(),
        })
        .collect();

    let predictions: Vec<Prediction> = page
        .items
        .iter()
        .filter_map(|item| predict::assess(item.product, now, settings))
        .collect();

    let advisories = predictions.iter().map(Prediction::advisory).collect();

    let pagination = (page.total_pages > 1).then(|| Pagination {
        page: page.page,
        total_pages: page.total_pages,
        has_previous: page.has_previous(),
        has_next: page.has_next(),
    });

    InventoryView {
        filter: filter.clone(),
        rows,
        predictions,
        advisories,
        pagination,
        total_matches: page.total_items,
        page: page.page,
    }
}
