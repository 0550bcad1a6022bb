//! CSV import and export
//!
//! Columns: `Name,Category,Price,Quantity,Threshold,Last Updated`.
//! Fields are joined with plain commas and never quoted, so a comma inside a
//! name or category shifts the remaining columns. Files written by the
//! browser version use the same layout and import unchanged.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::product::{
    parse_integer, parse_price, parse_timestamp, Field, FieldError, Product, ProductDraft,
};

/// Header row written on export and skipped on import
pub const CSV_HEADER: &str = "Name,Category,Price,Quantity,Threshold,Last Updated";

/// Serialize products to CSV, without a trailing newline
pub fn export_csv(products: &[Product]) -> String {
    let mut lines = Vec::with_capacity(products.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for p in products {
        let price = p.price.map(|v| v.to_string()).unwrap_or_default();
        let last_updated = p
            .last_updated
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default();
        lines.push(format!(
            "{},{},{},{},{},{}",
            p.name, p.category, price, p.quantity, p.threshold, last_updated
        ));
    }

    lines.join("\n")
}

/// A row that had every required field but failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the file
    pub line: usize,
    pub errors: Vec<FieldError>,
}

/// Outcome of parsing a CSV file
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Accepted rows, in file order
    pub products: Vec<Product>,
    /// Line numbers of rows missing a required field
    pub skipped: Vec<usize>,
    pub rejected: Vec<RejectedRow>,
}

impl ImportReport {
    pub fn accepted(&self) -> usize {
        self.products.len()
    }
}

/// Parse CSV text. The first line is always treated as the header.
///
/// Rows missing name, category, quantity or threshold are skipped. Rows with
/// an invalid number or timestamp are rejected with their field errors.
/// Accepted rows without a timestamp are stamped with `now`.
pub fn parse_csv(text: &str, now: DateTime<Utc>) -> ImportReport {
    let mut report = ImportReport::default();

    for (index, raw) in text.split('\n').enumerate().skip(1) {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        let cell = |i: usize| cells.get(i).copied().unwrap_or("");

        let (name, category, price, quantity, threshold, last_updated) =
            (cell(0), cell(1), cell(2), cell(3), cell(4), cell(5));

        if name.is_empty() || category.is_empty() || quantity.is_empty() || threshold.is_empty() {
            tracing::debug!("Skipping CSV line {}: missing required field", line_no);
            report.skipped.push(line_no);
            continue;
        }

        match parse_row(name, category, price, quantity, threshold, last_updated) {
            Ok(draft) => report.products.push(draft.into_product(now)),
            Err(errors) => {
                tracing::debug!("Rejecting CSV line {}: {} invalid field(s)", line_no, errors.len());
                report.rejected.push(RejectedRow {
                    line: line_no,
                    errors,
                });
            }
        }
    }

    report
}

fn parse_row(
    name: &str,
    category: &str,
    price: &str,
    quantity: &str,
    threshold: &str,
    last_updated: &str,
) -> std::result::Result<ProductDraft, Vec<FieldError>> {
    let price = parse_price(price);
    let quantity = parse_integer(Field::Quantity, quantity);
    let threshold = parse_integer(Field::Threshold, threshold);
    let last_updated = parse_timestamp(last_updated);

    match (price, quantity, threshold, last_updated) {
        (Ok(price), Ok(quantity), Ok(threshold), Ok(last_updated)) => Ok(ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
            threshold,
            last_updated,
        }),
        (price, quantity, threshold, last_updated) => Err([
            price.err(),
            quantity.err(),
            threshold.err(),
            last_updated.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}
