//! Theme and config command handlers

use crate::cli::{ConfigArgs, ConfigOperation, ThemeAction, ThemeArgs};
use crate::commands::{format_output, CommandContext};
use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::theme::Theme;

/// Run the theme command
pub fn run_theme(args: &ThemeArgs, ctx: &CommandContext) -> Result<String> {
    let mut inventory = ctx.open_inventory()?;
    let current = inventory.dark_mode()?;

    let dark = match args.action {
        ThemeAction::Show => current,
        ThemeAction::Toggle => !current,
        ThemeAction::Dark => true,
        ThemeAction::Light => false,
    };

    if args.action != ThemeAction::Show {
        inventory.set_dark_mode(dark)?;
        tracing::debug!("Dark mode set to {}", dark);
    }

    let name = Theme::new(dark).name();
    let json_value = serde_json::json!({
        "_type": "theme",
        "theme": name,
        "dark_mode": dark,
        "changed": dark != current
    });

    Ok(format_output(ctx, &json_value, || format!("Theme: {}\n", name)))
}

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        ConfigOperation::Show => run_config_show(ctx),
        ConfigOperation::Path => run_config_path(ctx),
        ConfigOperation::Init { force } => run_config_init(*force, ctx),
    }
}

fn run_config_show(ctx: &CommandContext) -> Result<String> {
    let data_dir = ctx.data_dir()?;
    let json_value = serde_json::json!({
        "_type": "config",
        "path": ctx.config_path.to_string_lossy(),
        "exists": ctx.config_path.exists(),
        "data_dir": data_dir.to_string_lossy(),
        "config": ctx.config
    });

    let toml = ctx.config.to_toml()?;
    Ok(format_output(ctx, &json_value, || {
        format!(
            "# config: {}\n# data_dir: {}\n{}",
            ctx.config_path.display(),
            data_dir.display(),
            toml
        )
    }))
}

fn run_config_path(ctx: &CommandContext) -> Result<String> {
    let json_value = serde_json::json!({
        "_type": "config_path",
        "path": ctx.config_path.to_string_lossy(),
        "exists": ctx.config_path.exists()
    });

    Ok(format_output(ctx, &json_value, || {
        format!("{}\n", ctx.config_path.display())
    }))
}

fn run_config_init(force: bool, ctx: &CommandContext) -> Result<String> {
    if ctx.config_path.exists() && !force {
        return Err(StockroomError::Config {
            message: format!(
                "{} already exists; pass --force to overwrite",
                ctx.config_path.display()
            ),
        });
    }

    StockroomConfig::default().save_to(&ctx.config_path)?;
    tracing::info!("Wrote default config to {}", ctx.config_path.display());

    let json_value = serde_json::json!({
        "_type": "config_init",
        "path": ctx.config_path.to_string_lossy(),
        "written": true
    });

    Ok(format_output(ctx, &json_value, || {
        format!("Wrote default config to {}\n", ctx.config_path.display())
    }))
}
