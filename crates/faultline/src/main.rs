//! faultline daemon
//!
//! Serves previews of HTTP error bodies using axum

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod router;

use config::Config;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Preview HTTP error bodies", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to bind to, overriding the configuration file
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = Config::find(cli.config.as_deref());
    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded configuration"),
        None => warn!("no config file found, using defaults"),
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.server.bind))?;
    info!(addr = %config.server.bind, "faultline listening");

    axum::serve(listener, router::create_router())
        .await
        .wrap_err("server error")?;

    Ok(())
}
