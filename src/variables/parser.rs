//! Definitions file parsing.
//!
//! A definitions file is a list of `KEY=VALUE` lines. Values may reference
//! variables defined on earlier lines (see [`expand`](super::expand::expand));
//! references are resolved once, at the point the line is read.

use std::io::ErrorKind;
use std::path::Path;

use super::ordered::OrderedVars;
use super::VariableSet;
use crate::Error;

/// Value assigned to a key whose line has no `=` separator.
pub const UNDEFINED_VALUE: &str = "undefined";

/// Parses a definitions file.
///
/// Returns `Ok(None)` when no path is given, the path does not exist, or the
/// path is not a regular file (symlinks are not followed). Other I/O failures
/// are reported as [`Error::Read`].
pub fn parse_file(path: Option<&Path>) -> Result<Option<VariableSet>, Error> {
    let Some(path) = path else {
        return Ok(None);
    };

    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "definitions file not found");
            return Ok(None);
        }
        Err(e) => return Err(read_error(e)),
    };
    if !metadata.is_file() {
        tracing::debug!(path = %path.display(), "definitions path is not a regular file");
        return Ok(None);
    }

    let bytes = std::fs::read(path).map_err(read_error)?;
    let vars = parse_str(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), count = vars.len(), "parsed definitions file");
    Ok(Some(vars))
}

/// Parses definitions from a string.
///
/// Blank lines and lines starting with `#` are skipped. Each remaining line
/// is split on its first `=`; the value is expanded against every variable
/// assigned so far, oldest assignment first. Redefining a key moves it to the
/// end of that order.
///
/// The closing character of a reference is part of the reference, including
/// `/`: with `HOME=/root`, `$HOME/bin` becomes `/rootbin`. Write
/// `$HOME//bin` or `%HOME%/bin` to keep the separator.
pub fn parse_str(content: &str) -> VariableSet {
    let mut vars = OrderedVars::new();

    // Splitting on both characters turns "\r\n" into an extra empty line,
    // which is skipped below like any other blank line.
    for line in content.split(['\r', '\n']) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, raw)) => (key, vars.expand(raw)),
            None => (line, UNDEFINED_VALUE.to_string()),
        };

        tracing::trace!(key, value = %value, "definition");
        vars.insert(key.to_string(), value);
    }

    vars.into()
}
