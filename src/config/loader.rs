use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::Table;

use super::env::load_env_vars;
use super::{ConfigError, Platform};

/// A layer in the platform loading pipeline.
#[derive(Debug)]
enum PlatformSource {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

impl PlatformSource {
    /// Writes this layer's settings into `merged`, replacing earlier values.
    fn apply(self, merged: &mut Table) -> Result<(), ConfigError> {
        match self {
            PlatformSource::File { path, required } => {
                let contents = match std::fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                        tracing::debug!(path = %path.display(), "optional platform file not found");
                        return Ok(());
                    }
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        return Err(ConfigError::FileNotFound(path));
                    }
                    Err(source) => return Err(ConfigError::ReadError { path, source }),
                };
                let layer: Table = match toml::from_str(&contents) {
                    Ok(layer) => layer,
                    Err(source) => return Err(ConfigError::ParseError { path, source }),
                };
                merged.extend(layer);
            }
            PlatformSource::Env { prefix, separator } => {
                load_env_vars(merged, &prefix, &separator);
            }
        }
        Ok(())
    }
}

/// Loads [`Platform`] settings from TOML files and environment variables.
///
/// Layers are applied in registration order on top of the host defaults,
/// later layers overriding earlier ones.
///
/// A settings file holds top-level keys:
///
/// ```toml
/// path_variable = "Path"
/// list_delimiter = ";"
/// ```
///
/// ## Example
///
/// ```no_run
/// use envdefs::PlatformLoader;
///
/// // host defaults -> file -> ENVDEFS__PATH_VARIABLE / ENVDEFS__LIST_DELIMITER
/// let platform = PlatformLoader::new()
///     .with_file("platform.toml", false)
///     .with_env("ENVDEFS", "__")
///     .load()?;
/// # Ok::<(), envdefs::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .load() is called"]
pub struct PlatformLoader {
    sources: Vec<PlatformSource>,
}

impl PlatformLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers a TOML settings file over what came before.
    ///
    /// A missing file is an error only when `required`; otherwise the layer
    /// contributes nothing.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(PlatformSource::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Reads overrides from `{prefix}{separator}{FIELD}` environment variables.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        self.sources.push(PlatformSource::Env {
            prefix: prefix.into(),
            separator,
        });
        self
    }

    /// Merges all layers and deserializes the result.
    pub fn load(self) -> Result<Platform, ConfigError> {
        let mut merged = Table::new();
        for source in self.sources {
            source.apply(&mut merged)?;
        }

        let platform: Platform = toml::Value::Table(merged).try_into()?;
        if platform.path_variable.is_empty() {
            return Err(ConfigError::EmptyPathVariable);
        }
        Ok(platform)
    }
}
