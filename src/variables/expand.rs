//! Reference substitution for definition values.
//!
//! A reference to `KEY` is written as one of `$`, `%` or `!`, then the key
//! (matched case-insensitively), then one of `\`, `/`, `%` or `!`. So `$HOME\`,
//! `%HOME%`, `!home!` and `$HOME/` all refer to `HOME`.

use regex::{NoExpand, Regex, RegexBuilder};

/// Characters that can open a reference token.
const OPENERS: [char; 3] = ['$', '%', '!'];

/// Replaces every reference to `key` in `value` with `replacement`.
///
/// The replacement is inserted literally. If the reference pattern cannot be
/// built (only possible for pathologically long keys), `value` is returned
/// unchanged.
pub fn expand(value: &str, key: &str, replacement: &str) -> String {
    if !may_reference(value) {
        return value.to_string();
    }
    match reference_pattern(key) {
        Some(pattern) => replace_references(value, &pattern, replacement),
        None => value.to_string(),
    }
}

/// Returns `false` when `value` cannot contain any reference token.
pub(crate) fn may_reference(value: &str) -> bool {
    value.contains(OPENERS)
}

/// Builds the case-insensitive pattern matching references to `key`.
pub(crate) fn reference_pattern(key: &str) -> Option<Regex> {
    let pattern = format!(r"[$%!]{}[\\/%!]", regex::escape(key));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(key, error = %e, "cannot build reference pattern, leaving value unexpanded");
            None
        }
    }
}

pub(crate) fn replace_references(value: &str, pattern: &Regex, replacement: &str) -> String {
    pattern
        .replace_all(value, NoExpand(replacement))
        .into_owned()
}
