//! Main entry point for the LibreTranslate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libretranslate_client::cli::commands::{self, Commands};
use libretranslate_client::LibreTranslateClient;

/// LibreTranslate CLI - translate text against a LibreTranslate server
#[derive(Parser, Debug)]
#[command(name = "libretranslate", version, about, long_about = None)]
struct Args {
    /// Server URL (defaults to LIBRETRANSLATE_URL, then the public instance)
    #[arg(long)]
    url: Option<String>,

    /// API key (defaults to LIBRETRANSLATE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// JSON or YAML config file, used instead of the environment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let crate_target = env!("CARGO_PKG_NAME").replace('-', "_");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", crate_target, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::resolve_config(
        args.config.as_deref(),
        args.url,
        args.api_key,
        args.timeout_ms,
    )?;
    let client = LibreTranslateClient::new(config)?;
    debug!("Using server {}", client.base_url());

    match args.command {
        Commands::Translate {
            text,
            source,
            target,
        } => {
            commands::handle_translate(&client, text, source, target, args.json).await?;
        }
        Commands::Detect { text } => {
            commands::handle_detect(&client, text, args.json).await?;
        }
        Commands::Languages => {
            commands::handle_languages(&client, args.json).await?;
        }
    }

    Ok(())
}
