//! stockroom CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockroom::cli::{Cli, Commands};
use stockroom::commands::{self, CommandContext};
use stockroom::config::StockroomConfig;
use stockroom::paths;

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> stockroom::Result<String> {
    let cli = Cli::parse();

    let config_path = paths::resolve_config_path(cli.config.as_deref())?;
    let config = StockroomConfig::load_from(&config_path)?;
    init_tracing(&config.logging.level, cli.verbose);

    tracing::debug!("Loaded config from {}", config_path.display());

    let ctx = CommandContext::new(
        cli.format,
        cli.verbose,
        config,
        config_path,
        cli.data_dir.clone(),
    );

    match &cli.command {
        Commands::Add(args) => commands::run_add(args, &ctx),
        Commands::Edit(args) => commands::run_edit(args, &ctx),
        Commands::Remove(args) => commands::run_remove(args, &ctx),
        Commands::Select(args) => commands::run_select(args, &ctx),
        Commands::BulkDelete(args) => commands::run_bulk_delete(args, &ctx),
        Commands::List(args) => commands::run_list(args, &ctx),
        Commands::Categories => commands::run_categories(&ctx),
        Commands::Import(args) => commands::run_import(args, &ctx),
        Commands::Export(args) => commands::run_export(args, &ctx),
        Commands::Analytics => commands::run_analytics(&ctx),
        Commands::Theme(args) => commands::run_theme(args, &ctx),
        Commands::Config(args) => commands::run_config(args, &ctx),
    }
}

/// Logs go to stderr so stdout stays clean for JSON/TOON/CSV output.
/// `RUST_LOG` overrides the configured level.
fn init_tracing(level: &str, verbose: bool) {
    let default_directive = if verbose {
        "stockroom=debug".to_string()
    } else {
        format!("stockroom={}", level)
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
