//! HTTP host for the certdeck API.
//!
//! Owns runtime configuration, initial store contents, and the outer router
//! (request tracing, `/api` mount point). The binary in `main.rs` wires these
//! together.

pub mod error;

pub use error::Error;

use std::{
  fmt,
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use certdeck_core::{catalog::Catalog, store::CertificationStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use error::Result;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `certdeck.toml` and
/// `CERTDECK_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  pub seed: Seed,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: "127.0.0.1".to_string(),
      port: 8080,
      seed: Seed::Sample,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// What the store holds when the server starts.
///
/// Written in config as `"empty"`, `"sample"`, or a path to an exported
/// catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Seed {
  Empty,
  Sample,
  File(PathBuf),
}

impl From<String> for Seed {
  fn from(value: String) -> Self {
    match value.trim() {
      "empty" => Self::Empty,
      "sample" => Self::Sample,
      path => Self::File(expand_tilde(Path::new(path))),
    }
  }
}

impl fmt::Display for Seed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Empty => f.write_str("empty"),
      Self::Sample => f.write_str("sample"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

/// Build the initial catalog for `seed`.
pub fn load_seed(seed: &Seed) -> Result<Catalog> {
  match seed {
    Seed::Empty => Ok(Catalog::default()),
    Seed::Sample => Ok(Catalog::sample()),
    Seed::File(path) => {
      let text = std::fs::read_to_string(path).map_err(|source| Error::SeedIo {
        path: path.clone(),
        source,
      })?;
      Catalog::from_json(&text).map_err(|source| Error::SeedCatalog {
        path: path.clone(),
        source,
      })
    }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: CertificationStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .nest("/api", certdeck_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
