use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("required platform file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read platform file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse platform file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to deserialize platform settings: {0}")]
    DeserializeError(#[from] toml::de::Error),

    #[error("path variable name must not be empty")]
    EmptyPathVariable,
}
