//! Startup errors for the server library.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read seed file {path:?}: {source}")]
  SeedIo {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("seed file {path:?} is not a valid catalog: {source}")]
  SeedCatalog {
    path:   PathBuf,
    #[source]
    source: certdeck_core::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
