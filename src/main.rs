// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use content_store::config::{default_config_path, expand_home, load_config};
use content_store::logging::{init_logging, parse_level, parse_rotation, LogConfig, LOG_FILENAME};
use content_store::{ContentService, FileStore};
use std::path::PathBuf;
use tracing::debug;

/// Content Store - edit the site's product, service, team and research collections
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: ~/.content-store/config.toml)
    #[arg(long, env = "CONTENT_STORE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the collection JSON files (overrides the config file)
    #[arg(long, env = "CONTENT_STORE_DIR")]
    content_dir: Option<PathBuf>,

    /// Enable JSON log format (for log aggregation)
    #[arg(long, env = "CONTENT_STORE_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "CONTENT_STORE_LOG_ROTATION")]
    log_rotation: Option<String>,

    /// Custom log directory (default: ~/.content-store/logs)
    #[arg(long, env = "CONTENT_STORE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    let log_dir = args.log_dir.unwrap_or_else(|| config.log_dir());
    let log_file = log_dir.join(LOG_FILENAME);
    let rotation = args
        .log_rotation
        .as_deref()
        .unwrap_or(&config.logging.rotation);
    let log_config = LogConfig {
        log_dir,
        log_level: parse_level(&config.logging.level),
        json_format: args.log_json || config.logging.json,
        rotation: parse_rotation(rotation),
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        return Err(e);
    }
    debug!("Using config {}", config_path.display());

    let content_dir = args
        .content_dir
        .unwrap_or_else(|| expand_home(&config.content_dir));
    let service =
        ContentService::new(FileStore::new(content_dir)).with_max_retries(config.max_retries);

    let output = cli::run(&service, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
