//! Low-stock prediction heuristic
//!
//! A product is at risk when it is already low (`quantity <= threshold`), or
//! when it is within `trend_factor * threshold` and has not been updated for
//! more than `stale_days` days. There is no historical series; the rule is
//! evaluated fresh against "now" on every call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Tunables for the heuristic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionSettings {
    /// Days without an update after which a near-low product counts as stale
    #[serde(default = "default_stale_days")]
    pub stale_days: i64,

    /// Multiple of the threshold considered "trending toward low"
    #[serde(default = "default_trend_factor")]
    pub trend_factor: f64,
}

fn default_stale_days() -> i64 {
    7
}

fn default_trend_factor() -> f64 {
    1.5
}

impl Default for PredictionSettings {
    fn default() -> Self {
        Self {
            stale_days: default_stale_days(),
            trend_factor: default_trend_factor(),
        }
    }
}

/// Why a product was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskReason {
    /// `quantity <= threshold`
    LowStock,
    /// Near the threshold and not updated recently
    TrendingLowAndStale,
}

/// An at-risk product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub id: uuid::Uuid,
    pub name: String,
    pub days_since_update: i64,
    pub reason: RiskReason,
}

impl Prediction {
    /// Prediction line shown under the inventory list
    pub fn message(&self) -> String {
        format!(
            "{} is predicted to go out of stock soon (last updated {} days ago).",
            self.name, self.days_since_update
        )
    }

    /// Advisory text for the simulated reorder; nothing is actually ordered
    pub fn advisory(&self) -> String {
        format!("Automated reorder initiated for {}.", self.name)
    }

    /// Notification title
    pub fn alert_title(&self) -> String {
        format!("Low Stock Alert: {}", self.name)
    }
}

/// Whole days between the last update and `now`, rounded down; 0 without a timestamp
pub fn days_since_update(product: &Product, now: DateTime<Utc>) -> i64 {
    match product.last_updated {
        Some(updated) => (now - updated).num_milliseconds().div_euclid(MILLIS_PER_DAY),
        None => 0,
    }
}

/// Evaluate the heuristic for one product
pub fn assess(product: &Product, now: DateTime<Utc>, settings: &PredictionSettings) -> Option<Prediction> {
    let days = days_since_update(product, now);

    let reason = if product.is_low_stock() {
        RiskReason::LowStock
    } else if (product.quantity as f64) <= product.threshold as f64 * settings.trend_factor
        && days > settings.stale_days
    {
        RiskReason::TrendingLowAndStale
    } else {
        return None;
    };

    Some(Prediction {
        id: product.id,
        name: product.name.clone(),
        days_since_update: days,
        reason,
    })
}
