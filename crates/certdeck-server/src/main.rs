//! certdeck server binary.
//!
//! Reads `certdeck.toml` (or the path specified with `--config`), layers
//! `CERTDECK_*` environment variables over it, seeds an in-memory store, and
//! serves the JSON API under `/api`.
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! seed = "sample"   # or "empty", or a path to an exported catalog
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use certdeck_server::{ServerConfig, load_seed};
use certdeck_store_memory::MemoryStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "certdeck certification server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "certdeck.toml")]
  config: PathBuf,

  /// Override the configured seed (`empty`, `sample`, or a file path).
  #[arg(long)]
  seed: Option<String>,
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

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CERTDECK"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;
  if let Some(seed) = cli.seed {
    server_cfg.seed = seed.into();
  }

  let catalog = load_seed(&server_cfg.seed)?;
  tracing::info!(seed = %server_cfg.seed, records = catalog.len(), "store seeded");
  let store = Arc::new(MemoryStore::with_catalog(catalog));

  let app = certdeck_server::router(store);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}/api");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("shut down");
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for ctrl-c");
    std::future::pending::<()>().await;
  }
}
