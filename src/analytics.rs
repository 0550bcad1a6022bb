//! Category aggregates, summary statistics and chart data
//!
//! The trend chart has no history behind it. It is a placeholder built from
//! the current total stock plus per-day random noise, and is always marked
//! `synthetic` so no output presents it as a real trend.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::product::Product;

/// Days covered by the trend chart, ending today
pub const TREND_DAYS: usize = 7;

/// Noise added to each synthetic trend point is drawn from `-TREND_NOISE..TREND_NOISE`
pub const TREND_NOISE: i64 = 10;

/// Per-category aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_quantity: i64,
    pub low_stock_count: usize,
    pub total_value: f64,
}

/// Collection-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub total_value: f64,
    pub category_count: usize,
}

/// A labelled numeric series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Grouped bar comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Fraction of the whole, 0 when the whole is not positive
    pub share: f64,
}

/// Proportional view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

/// Trailing-days line series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    /// Always true: the points are generated, not recorded
    pub synthetic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub bar: BarChart,
    pub proportion: ProportionChart,
    pub trend: TrendChart,
}

/// Everything the analytics screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub categories: Vec<CategoryStats>,
    pub summary: Summary,
    /// `None` for an empty collection
    pub charts: Option<ChartSet>,
}

/// Sum that pins at the `i64` bounds instead of overflowing
fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0i64, i64::saturating_add)
}

/// Group by category in first-seen order
pub fn category_stats(products: &[Product]) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = Vec::new();

    for product in products {
        let index = match stats.iter().position(|s| s.category == product.category) {
            Some(index) => index,
            None => {
                stats.push(CategoryStats {
                    category: product.category.clone(),
                    total_quantity: 0,
                    low_stock_count: 0,
                    total_value: 0.0,
                });
                stats.len() - 1
            }
        };

        let entry = &mut stats[index];
        entry.total_quantity = entry.total_quantity.saturating_add(product.quantity);
        entry.total_value += product.value();
        if product.is_low_stock() {
            entry.low_stock_count += 1;
        }
    }

    stats
}

pub fn summary(products: &[Product], categories: &[CategoryStats]) -> Summary {
    Summary {
        total_products: products.len(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
        total_value: products.iter().map(Product::value).sum(),
        category_count: categories.len(),
    }
}

pub fn bar_chart(categories: &[CategoryStats]) -> BarChart {
    BarChart {
        title: "Inventory Overview by Category".to_string(),
        labels: categories.iter().map(|c| c.category.clone()).collect(),
        series: vec![
            Series {
                label: "Total Quantity".to_string(),
                values: categories.iter().map(|c| c.total_quantity as f64).collect(),
            },
            Series {
                label: "Low Stock Items".to_string(),
                values: categories.iter().map(|c| c.low_stock_count as f64).collect(),
            },
        ],
    }
}

pub fn proportion_chart(categories: &[CategoryStats]) -> ProportionChart {
    let whole = saturating_sum(categories.iter().map(|c| c.total_quantity));
    let slices = categories
        .iter()
        .map(|c| Slice {
            label: c.category.clone(),
            value: c.total_quantity as f64,
            share: if whole > 0 {
                c.total_quantity as f64 / whole as f64
            } else {
                0.0
            },
        })
        .collect();

    ProportionChart {
        title: "Category Distribution".to_string(),
        slices,
    }
}

/// Placeholder trend: `max(0, total_stock + noise)` for each of the last `TREND_DAYS` days
pub fn synthetic_trend<R: Rng>(total_stock: i64, today: NaiveDate, rng: &mut R) -> TrendChart {
    let labels = (0..TREND_DAYS)
        .map(|i| {
            let back = (TREND_DAYS - 1 - i) as i64;
            (today - Duration::days(back)).format("%Y-%m-%d").to_string()
        })
        .collect();

    let values = (0..TREND_DAYS)
        .map(|_| {
            total_stock
                .saturating_add(rng.random_range(-TREND_NOISE..TREND_NOISE))
                .max(0)
        })
        .collect();

    TrendChart {
        title: "Stock Level Trends (Last 7 Days)".to_string(),
        labels,
        values,
        synthetic: true,
    }
}

/// Build aggregates, summary and charts for the whole collection
pub fn build<R: Rng>(products: &[Product], today: NaiveDate, rng: &mut R) -> Analytics {
    let categories = category_stats(products);
    let summary = summary(products, &categories);

    let charts = if products.is_empty() {
        None
    } else {
        let total_stock = saturating_sum(products.iter().map(|p| p.quantity));
        Some(ChartSet {
            bar: bar_chart(&categories),
            proportion: proportion_chart(&categories),
            trend: synthetic_trend(total_stock, today, rng),
        })
    };

    Analytics {
        categories,
        summary,
        charts,
    }
}
