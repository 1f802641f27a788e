//! Variable sets: parsing definitions files, merging sets and appending to
//! list variables.

mod append;
mod expand;
mod merge;
mod ordered;
mod parser;

use std::collections::HashMap;

pub use append::append_paths;
pub use expand::expand;
pub use merge::merge;
pub use parser::{parse_file, parse_str, UNDEFINED_VALUE};

/// Mapping from case-sensitive variable name to value.
pub type VariableSet = HashMap<String, String>;

/// Python's module search path variable.
pub const PYTHONPATH: &str = "PYTHONPATH";
