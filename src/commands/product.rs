//! Product command handlers - add, edit, remove, select, bulk-delete

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::alerts::{self, TerminalNotifier};
use crate::cli::{BulkDeleteArgs, EditArgs, ProductArgs, TargetArgs};
use crate::commands::analytics::attach_charts;
use crate::commands::{format_output, CommandContext};
use crate::error::{Result, StockroomError};
use crate::predict::{self, Prediction};
use crate::product::Product;
use crate::store::{BulkDeleteOutcome, Inventory, KeyValueStore};

/// Run the add command
pub fn run_add(args: &ProductArgs, ctx: &CommandContext) -> Result<String> {
    let draft = args
        .to_form()
        .validate()
        .map_err(|errors| StockroomError::InvalidInput { errors })?;

    let mut inventory = ctx.open_inventory()?;
    let product = inventory.add(draft, ctx.now)?;
    let prediction = assess_and_alert(&product, ctx);

    let change = Change {
        kind: "product_added",
        verb: "Added",
        product: &product,
        prediction: prediction.as_ref(),
    };
    describe_change(ctx, &inventory, args.charts, change)
}

/// Run the edit command
pub fn run_edit(args: &EditArgs, ctx: &CommandContext) -> Result<String> {
    let draft = args
        .fields
        .to_form()
        .validate()
        .map_err(|errors| StockroomError::InvalidInput { errors })?;

    let mut inventory = ctx.open_inventory()?;
    let id = inventory.resolve(&args.id)?;
    let product = inventory.update(id, draft, ctx.now)?;
    let prediction = assess_and_alert(&product, ctx);

    let change = Change {
        kind: "product_updated",
        verb: "Updated",
        product: &product,
        prediction: prediction.as_ref(),
    };
    describe_change(ctx, &inventory, args.fields.charts, change)
}

/// Run the remove command
pub fn run_remove(args: &TargetArgs, ctx: &CommandContext) -> Result<String> {
    let mut inventory = ctx.open_inventory()?;
    let id = inventory.resolve(&args.id)?;
    let product = inventory.remove(id)?;

    let mut json_value = serde_json::json!({
        "_type": "product_removed",
        "id": product.id,
        "name": product.name,
        "remaining": inventory.len()
    });
    let charts = attach_charts(args.charts, &inventory, ctx, &mut json_value)?;

    Ok(format_output(ctx, &json_value, || {
        let mut output = format!("Removed {} ({})\n", product.name, product.short_id());
        output.push_str(charts.as_deref().unwrap_or_default());
        output
    }))
}

/// Run the select command
pub fn run_select(args: &TargetArgs, ctx: &CommandContext) -> Result<String> {
    let mut inventory = ctx.open_inventory()?;
    let id = inventory.resolve(&args.id)?;
    let selected = inventory.toggle_select(id)?;
    let selected_count = inventory.selected_count();
    let name = inventory.get(id).map(|p| p.name.clone()).unwrap_or_default();

    let mut json_value = serde_json::json!({
        "_type": "product_selection",
        "id": id,
        "name": name,
        "selected": selected,
        "selected_count": selected_count
    });
    let charts = attach_charts(args.charts, &inventory, ctx, &mut json_value)?;

    Ok(format_output(ctx, &json_value, || {
        let verb = if selected { "Selected" } else { "Deselected" };
        let mut output = format!("{} {} ({} selected)\n", verb, name, selected_count);
        output.push_str(charts.as_deref().unwrap_or_default());
        output
    }))
}

/// Run the bulk-delete command
pub fn run_bulk_delete(args: &BulkDeleteArgs, ctx: &CommandContext) -> Result<String> {
    let mut inventory = ctx.open_inventory()?;
    let outcome = inventory.bulk_delete(|count| confirm_bulk_delete(count, args.yes))?;

    let mut json_value = match outcome {
        BulkDeleteOutcome::Declined { selected } => serde_json::json!({
            "_type": "bulk_delete",
            "deleted": 0,
            "cancelled": true,
            "selected": selected
        }),
        BulkDeleteOutcome::Deleted { removed } => serde_json::json!({
            "_type": "bulk_delete",
            "deleted": removed,
            "cancelled": false,
            "remaining": inventory.len()
        }),
    };

    let changed = matches!(outcome, BulkDeleteOutcome::Deleted { .. });
    let charts = attach_charts(args.charts && changed, &inventory, ctx, &mut json_value)?;

    Ok(format_output(ctx, &json_value, || {
        let mut output = match outcome {
            BulkDeleteOutcome::Declined { .. } => "Deletion cancelled.\n".to_string(),
            BulkDeleteOutcome::Deleted { removed } => {
                format!("Deleted {} selected products.\n", removed)
            }
        };
        output.push_str(charts.as_deref().unwrap_or_default());
        output
    }))
}

/// Ask before deleting; without a terminal and without `--yes` the answer is no
fn confirm_bulk_delete(count: usize, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }
    if !std::io::stdin().is_terminal() {
        tracing::warn!("No terminal to confirm bulk delete; pass --yes to skip the prompt");
        return false;
    }

    Confirm::new()
        .with_prompt(format!(
            "Are you sure you want to delete {} selected products?",
            count
        ))
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn assess_and_alert(product: &Product, ctx: &CommandContext) -> Option<Prediction> {
    let prediction = predict::assess(product, ctx.now, &ctx.config.prediction)?;
    alerts::dispatch(
        std::slice::from_ref(&prediction),
        ctx.config.notifications.enabled,
        &mut TerminalNotifier,
    )
    .log();
    Some(prediction)
}

/// An added or updated product, as reported back to the user
struct Change<'a> {
    kind: &'static str,
    verb: &'static str,
    product: &'a Product,
    prediction: Option<&'a Prediction>,
}

fn describe_change<S: KeyValueStore>(
    ctx: &CommandContext,
    inventory: &Inventory<S>,
    charts: bool,
    change: Change<'_>,
) -> Result<String> {
    let Change {
        kind,
        verb,
        product,
        prediction,
    } = change;

    let mut json_value = serde_json::json!({
        "_type": kind,
        "product": product,
        "low_stock": product.is_low_stock(),
        "prediction": prediction.map(|p| serde_json::json!({
            "message": p.message(),
            "advisory": p.advisory(),
            "reason": p.reason
        }))
    });
    let charts = attach_charts(charts, inventory, ctx, &mut json_value)?;

    Ok(format_output(ctx, &json_value, || {
        let mut output = format!(
            "{} {} ({}) - id {}\n",
            verb,
            product.name,
            product.category,
            product.short_id()
        );
        if product.is_low_stock() {
            output.push_str(&format!(
                "Low stock: quantity {} is at or below threshold {}\n",
                product.quantity, product.threshold
            ));
        }
        if let Some(p) = prediction {
            output.push_str(&format!("{}\n{}\n", p.message(), p.advisory()));
        }
        output.push_str(charts.as_deref().unwrap_or_default());
        output
    }))
}
