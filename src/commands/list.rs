//! List command handler - filtered, paginated inventory view

use crate::alerts::{self, TerminalNotifier};
use crate::cli::ListArgs;
use crate::commands::{banner, format_output, theme_for, CommandContext};
use crate::error::Result;
use crate::filter::Filter;
use crate::render::{self, InventoryView, Pagination, Row};
use crate::theme::Theme;

/// Run the list command
pub fn run_list(args: &ListArgs, ctx: &CommandContext) -> Result<String> {
    let inventory = ctx.open_inventory()?;
    let theme = theme_for(&inventory)?;

    let filter = Filter {
        search: args.search.clone(),
        category: args.category.clone(),
        low_stock_only: args.low_stock,
    };
    let page_size = args
        .page_size
        .map(|n| n as usize)
        .unwrap_or(ctx.config.display.page_size);

    let view = render::render(
        inventory.products(),
        &filter,
        args.page,
        page_size,
        ctx.now,
        &ctx.config.prediction,
    );

    if view.page != args.page.max(1) {
        tracing::debug!("Requested page {} clamped to {}", args.page, view.page);
    }

    let sent = alerts::dispatch(
        &view.predictions,
        ctx.config.notifications.enabled,
        &mut TerminalNotifier,
    );
    sent.log();

    let json_value = serde_json::json!({
        "_type": "inventory",
        "total_products": inventory.len(),
        "view": view
    });

    Ok(format_output(ctx, &json_value, || format_view(&view, &theme)))
}

/// Run the categories command
pub fn run_categories(ctx: &CommandContext) -> Result<String> {
    let inventory = ctx.open_inventory()?;
    let categories = inventory.categories();

    let json_value = serde_json::json!({
        "_type": "categories",
        "count": categories.len(),
        "categories": categories
    });

    Ok(format_output(ctx, &json_value, || {
        if categories.is_empty() {
            return "No categories yet.\n".to_string();
        }
        let mut output = String::from("All Categories\n");
        for category in &categories {
            output.push_str(&format!("  - {}\n", category));
        }
        output
    }))
}

fn format_view(view: &InventoryView, theme: &Theme) -> String {
    let mut output = banner("STOCKROOM INVENTORY");

    if view.rows.is_empty() {
        if view.filter.is_active() {
            output.push_str("No products match the current filter.\n");
        } else {
            output.push_str("No products yet. Add one with `stockroom add`.\n");
        }
        return output;
    }

    for row in &view.rows {
        output.push_str(&format_row(row, theme));
    }

    if let Some(pagination) = &view.pagination {
        output.push('\n');
        output.push_str(&format_pagination(pagination, theme));
    }

    if !view.predictions.is_empty() {
        output.push_str(&format!("\n{}\n", theme.heading.apply_to("Predictions")));
        for prediction in &view.predictions {
            output.push_str(&format!("  - {}\n", prediction.message()));
        }
    }

    if !view.advisories.is_empty() {
        output.push_str(&format!("\n{}\n", theme.heading.apply_to("Reorders")));
        for advisory in &view.advisories {
            output.push_str(&format!("  - {}\n", theme.warning.apply_to(advisory)));
        }
    }

    output
}

fn format_row(row: &Row, theme: &Theme) -> String {
    let p = &row.product;
    let checkbox = if p.selected { "[x]" } else { "[ ]" };
    let line = format!(
        "{} {} #{:<3} {} ({}) - Quantity: {} - Threshold: {} - Price: {}",
        checkbox,
        p.short_id(),
        row.position + 1,
        p.name,
        p.category,
        p.quantity,
        p.threshold,
        p.display_price()
    );

    if row.low_stock {
        format!("{}  {}\n", theme.low_stock.apply_to(line), theme.low_stock.apply_to("LOW"))
    } else {
        format!("{}\n", line)
    }
}

fn format_pagination(pagination: &Pagination, theme: &Theme) -> String {
    let previous = if pagination.has_previous {
        theme.accent.apply_to("< Previous").to_string()
    } else {
        theme.muted.apply_to("< Previous (disabled)").to_string()
    };
    let next = if pagination.has_next {
        theme.accent.apply_to("Next >").to_string()
    } else {
        theme.muted.apply_to("Next > (disabled)").to_string()
    };
    format!(
        "{}  Page {} of {}  {}\n",
        previous, pagination.page, pagination.total_pages, next
    )
}
