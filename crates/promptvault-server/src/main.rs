//! Promptvault server - HTTP API for prompt version lookup.

use anyhow::Result;
use clap::Parser;
use promptvault_server::{config::Config, logging, routes, state::AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use logging::{LogConfig, LogFormat};

/// Serve prompt version lists over HTTP.
#[derive(Parser, Debug)]
#[command(name = "promptvault-server")]
#[command(about = "Lists prompt versions per category at GET /api/prompts/versions?category=NAME")]
#[command(version)]
struct Cli {
    /// TOML config with host, port and a [versions] table (default: config/default.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listen on this port instead of the configured one
    #[arg(short, long)]
    port: Option<u16>,

    /// Log every lookup failure and startup step plus tower_http request lines
    #[arg(short, long)]
    verbose: bool,

    /// Also log per-request version counts (promptvault::api, promptvault::versions)
    #[arg(short, long)]
    debug: bool,

    /// Log everything at TRACE, including tower_http spans
    #[arg(long)]
    trace: bool,

    /// Only warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Per-target level, e.g. "api=debug", "versions=trace" or "startup=warn".
    /// Repeatable; short names are expanded to "promptvault::NAME".
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log line format: text or json
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(
        target: "promptvault::startup",
        "Loaded configuration (port: {}, categories: {})",
        config.port,
        config.versions.len()
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = Arc::new(AppState::new(config));
    let app = routes::router(state);

    tracing::info!(target: "promptvault::startup", "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
