//! Import/export command handlers - CSV transfer

use std::fs;

use crate::cli::{ExportArgs, ImportArgs, OutputFormat};
use crate::commands::analytics::attach_charts;
use crate::commands::{format_output, CommandContext};
use crate::error::{Result, StockroomError};
use crate::fs_utils;
use crate::transfer::{export_csv, parse_csv};

/// Run the import command
pub fn run_import(args: &ImportArgs, ctx: &CommandContext) -> Result<String> {
    let text = fs::read_to_string(&args.file).map_err(|e| StockroomError::IoError {
        path: args.file.clone(),
        message: e.to_string(),
    })?;

    // Parse the whole file before touching the store
    let report = parse_csv(&text, ctx.now);

    let mut inventory = ctx.open_inventory()?;
    let imported = inventory.append(report.products.clone())?;

    let mut json_value = serde_json::json!({
        "_type": "import",
        "file": args.file.to_string_lossy(),
        "imported": imported,
        "skipped": report.skipped.len(),
        "skipped_lines": report.skipped,
        "rejected": report.rejected,
        "total_products": inventory.len()
    });
    let charts = attach_charts(args.charts, &inventory, ctx, &mut json_value)?;

    Ok(format_output(ctx, &json_value, || {
        let mut output = format!(
            "Imported {} products from {}\n",
            imported,
            args.file.display()
        );
        if !report.skipped.is_empty() {
            output.push_str(&format!(
                "Skipped {} rows missing a required field\n",
                report.skipped.len()
            ));
        }
        if !report.rejected.is_empty() {
            output.push_str(&format!("Rejected {} rows:\n", report.rejected.len()));
            for row in &report.rejected {
                let reasons: Vec<String> = row.errors.iter().map(|e| e.to_string()).collect();
                output.push_str(&format!("  line {}: {}\n", row.line, reasons.join("; ")));
            }
        }
        output.push_str(charts.as_deref().unwrap_or_default());
        output
    }))
}

/// Run the export command
pub fn run_export(args: &ExportArgs, ctx: &CommandContext) -> Result<String> {
    let inventory = ctx.open_inventory()?;
    let mut csv = export_csv(inventory.products());
    csv.push('\n');

    match &args.output {
        Some(path) => {
            fs_utils::atomic_write(path, &csv).map_err(|e| StockroomError::IoError {
                path: path.clone(),
                message: e.to_string(),
            })?;
            tracing::info!("Exported {} products to {}", inventory.len(), path.display());

            let json_value = serde_json::json!({
                "_type": "export",
                "file": path.to_string_lossy(),
                "exported": inventory.len()
            });
            Ok(format_output(ctx, &json_value, || {
                format!("Exported {} products to {}\n", inventory.len(), path.display())
            }))
        }
        None if ctx.format == OutputFormat::Text => Ok(csv),
        None => {
            let json_value = serde_json::json!({
                "_type": "export",
                "exported": inventory.len(),
                "csv": csv
            });
            Ok(format_output(ctx, &json_value, String::new))
        }
    }
}
