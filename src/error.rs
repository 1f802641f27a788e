use std::path::PathBuf;

use crate::config::ConfigError;
use thiserror::Error;

/// Top-level error type for the envdefs library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("platform configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read definitions file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
