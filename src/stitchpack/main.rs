use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use stitchpack::api::{ConfigAction, StitchpackApi};
use stitchpack::backend::pyembroidery::PyEmbroideryBackend;
use stitchpack::config::{StitchpackConfig, CONFIG_KEYS};
use stitchpack::error::{Result, StitchpackError};
use tracing_subscriber::EnvFilter;

mod args;
mod render;
use args::{Cli, Commands};
use render::{print_messages, print_summary};

const HOME_ENV: &str = "STITCHPACK_HOME";
const LOG_ENV: &str = "STITCHPACK_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StitchpackApi<PyEmbroideryBackend>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Export { input, output } => handle_export(&ctx, &input, &output),
        Commands::Import {
            input,
            output,
            format_version,
        } => handle_import(&mut ctx, &input, &output, format_version),
        Commands::Inspect { path, json } => handle_inspect(&ctx, &path, json),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

/// Logs go to stderr so stdout stays clean for `inspect --json`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Keep an already installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "stitchpack", "stitchpack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| StitchpackError::Config("Could not determine config dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = resolve_config_dir(cli)?;
    let config = StitchpackConfig::load(&config_dir)?;
    tracing::debug!(config_dir = %config_dir.display(), ?config, "loaded config");

    let backend = PyEmbroideryBackend::new(&config.python).with_args(config.python_args.clone());
    let api = StitchpackApi::new(backend, config, config_dir);

    Ok(AppContext { api })
}

fn handle_export(ctx: &AppContext, input: &Path, output: &Path) -> Result<()> {
    let result = ctx.api.export_pattern(input, output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(
    ctx: &mut AppContext,
    input: &Path,
    output: &Path,
    format_version: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .import_pattern(input, output, format_version.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_inspect(ctx: &AppContext, path: &Path, json: bool) -> Result<()> {
    let result = ctx.api.inspect_container(path)?;
    if let Some(summary) = &result.summary {
        print_summary(summary, json)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
