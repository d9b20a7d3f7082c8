//! Wiring for the recipes server binary: configuration, store bootstrap, and
//! the HTTP application with its tracing layer.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use recipes_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_STORE_PATH: &str = "./recipes.db";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file,
/// `RECIPES_*` environment variables, and finally a bare `PORT` override.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  /// SQLite database file; created (and given the schema) if missing.
  pub store_path:  PathBuf,
  /// Schema script for a new database file. Defaults to the built-in schema.
  pub schema_path: Option<PathBuf>,
}

impl ServerConfig {
  /// Load configuration from `file` (optional on disk) and the environment.
  /// `port` takes precedence over every other source.
  pub fn load(file: PathBuf, port: Option<String>) -> Result<Self, config::ConfigError> {
    Self::load_with_env(file, port, None)
  }

  /// Like [`load`](Self::load), but `RECIPES_*` variables are read from `env`
  /// instead of the process environment when it is given.
  pub fn load_with_env(
    file: PathBuf,
    port: Option<String>,
    env:  Option<config::Map<String, String>>,
  ) -> Result<Self, config::ConfigError> {
    let settings = config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .set_default("store_path", DEFAULT_STORE_PATH)?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("RECIPES").source(env))
      .set_override_option("port", port)?
      .build()?;

    let mut cfg: ServerConfig = settings.try_deserialize()?;
    cfg.store_path = expand_tilde(&cfg.store_path);
    cfg.schema_path = cfg.schema_path.as_deref().map(expand_tilde);
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Bootstrap ────────────────────────────────────────────────────────────────

/// Open the configured store. The schema script is only read when the
/// database file does not exist yet.
pub async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  let store = match &cfg.schema_path {
    Some(schema_path) if !cfg.store_path.exists() => {
      let schema = tokio::fs::read_to_string(schema_path)
        .await
        .with_context(|| format!("failed to read schema script {schema_path:?}"))?;
      SqliteStore::open_with_schema(&cfg.store_path, &schema).await
    }
    _ => SqliteStore::open(&cfg.store_path).await,
  };
  store.with_context(|| format!("failed to open store at {:?}", cfg.store_path))
}

/// The full HTTP application: the recipe API wrapped in a request trace layer.
pub fn app(store: SqliteStore) -> Router {
  recipes_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http())
}
