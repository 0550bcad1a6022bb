//! Analytics command handler - category charts and summary statistics

use crate::analytics::{self, Analytics, Summary};
use crate::chart::{self, TextSurface};
use crate::commands::{banner, format_output, theme_for, CommandContext};
use crate::error::Result;
use crate::product::Product;
use crate::store::{Inventory, KeyValueStore};
use crate::theme::Theme;

/// Run the analytics command
pub fn run_analytics(ctx: &CommandContext) -> Result<String> {
    let inventory = ctx.open_inventory()?;
    let theme = theme_for(&inventory)?;
    let report = build_report(inventory.products(), ctx);

    let json_value = serde_json::json!({
        "_type": "analytics",
        "summary": report.summary,
        "categories": report.categories,
        "charts": report.charts
    });

    Ok(format_output(ctx, &json_value, || format_analytics(&report, theme)))
}

/// With `--charts`, add the analytics report to a data-changing command's
/// JSON output and return its text rendering
pub(crate) fn attach_charts<S: KeyValueStore>(
    enabled: bool,
    inventory: &Inventory<S>,
    ctx: &CommandContext,
    json_value: &mut serde_json::Value,
) -> Result<Option<String>> {
    if !enabled {
        return Ok(None);
    }

    let theme = theme_for(inventory)?;
    let report = build_report(inventory.products(), ctx);
    json_value["analytics"] = report_json(&report);
    Ok(Some(format!("\n{}", format_analytics(&report, theme))))
}

fn build_report(products: &[Product], ctx: &CommandContext) -> Analytics {
    let mut rng = rand::rng();
    analytics::build(products, ctx.now.date_naive(), &mut rng)
}

fn report_json(report: &Analytics) -> serde_json::Value {
    serde_json::json!({
        "summary": report.summary,
        "categories": report.categories,
        "charts": report.charts
    })
}

fn format_analytics(report: &Analytics, theme: Theme) -> String {
    let mut output = banner("STOCKROOM ANALYTICS");

    let Some(charts) = &report.charts else {
        output.push_str("No data available for analytics.\n");
        return output;
    };

    let mut surface = TextSurface::new(theme.clone());
    chart::draw_all(charts, &mut surface);
    output.push_str(&surface.finish());
    output.push_str(&format_summary(&report.summary, &theme));
    output
}

fn format_summary(summary: &Summary, theme: &Theme) -> String {
    format!(
        "{}\n  Total Products: {}\n  Low Stock Items: {}\n  Total Inventory Value: ${:.2}\n  Categories: {}\n",
        theme.heading.apply_to("Summary Statistics"),
        summary.total_products,
        summary.low_stock_count,
        summary.total_value,
        summary.category_count
    )
}
