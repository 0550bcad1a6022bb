//! Filtering and pagination of the product list

use serde::Serialize;

use crate::product::Product;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Active list filters; the default matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    /// Case-insensitive substring of the product name
    pub search: String,
    /// Exact category, empty for all categories
    pub category: String,
    /// Only products with `quantity <= threshold`
    pub low_stock_only: bool,
}

impl Filter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product) && self.matches_low_stock(product)
    }

    pub fn matches_search(&self, product: &Product) -> bool {
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn matches_category(&self, product: &Product) -> bool {
        self.category.is_empty() || product.category == self.category
    }

    pub fn matches_low_stock(&self, product: &Product) -> bool {
        !self.low_stock_only || product.is_low_stock()
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty() || self.low_stock_only
    }
}

/// A product paired with its position in the full collection
#[derive(Debug, Clone, Copy)]
pub struct Indexed<'a> {
    pub position: usize,
    pub product: &'a Product,
}

/// Matching products in collection order, with their absolute positions
pub fn filter<'a>(products: &'a [Product], filter: &Filter) -> Vec<Indexed<'a>> {
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(position, product)| Indexed { position, product })
        .collect()
}

/// One page of a filtered list
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub items: Vec<Indexed<'a>>,
    /// 1-based page actually shown, after clamping
    pub page: usize,
    /// `ceil(total_items / page_size)`, 0 for an empty list
    pub total_pages: usize,
    pub total_items: usize,
}

impl Page<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Number of pages needed for `total_items`
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slice `[(page-1)*page_size, page*page_size)` out of `items`.
///
/// `page` is clamped into `1..=max(total_pages, 1)`, so a stale page number
/// after a filter change lands on the last page.
pub fn paginate<'a>(items: &[Indexed<'a>], page: usize, page_size: usize) -> Page<'a> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = page_count(total_items, page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let slice = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: slice,
        page,
        total_pages,
        total_items,
    }
}
