//! recipes-server binary.
//!
//! Reads `recipes.toml` (or the path given with `--config`), opens the SQLite
//! store, and serves the recipe API over HTTP. The `PORT` environment
//! variable overrides the configured port.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use recipes_server::{ServerConfig, app, open_store};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Recipes JSON API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "recipes.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = ServerConfig::load(cli.config, std::env::var("PORT").ok())
    .context("failed to load configuration")?;

  let store = open_store(&cfg).await?;

  let address = cfg.address();
  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app(store)).await.context("server error")?;

  Ok(())
}
