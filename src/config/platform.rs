use serde::Deserialize;

/// Platform facts the environment service depends on.
///
/// Missing fields fall back to the host values when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Platform {
    /// Name of the executable search path variable (`PATH`, or `Path` on Windows).
    pub path_variable: String,
    /// Separator between entries of list variables.
    pub list_delimiter: char,
}

impl Platform {
    pub fn new(path_variable: impl Into<String>, list_delimiter: char) -> Self {
        Self {
            path_variable: path_variable.into(),
            list_delimiter,
        }
    }

    /// Returns the values for the platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::new("Path", ';')
        } else {
            Self::new("PATH", ':')
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}
