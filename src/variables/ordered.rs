use std::cell::OnceCell;
use std::collections::HashMap;

use regex::Regex;

use super::expand::{may_reference, reference_pattern, replace_references};
use super::VariableSet;

#[derive(Debug)]
struct Assignment {
    value: String,
    /// Reference pattern for the key, built the first time a value needs it.
    pattern: OnceCell<Option<Regex>>,
}

/// Insertion-ordered variable map used while parsing a definitions file.
///
/// Re-assigning a key drops its previous position and appends it at the end,
/// so iteration order always reflects the most recent assignment. Each key's
/// reference pattern is compiled at most once per parse.
#[derive(Debug, Default)]
pub(crate) struct OrderedVars {
    order: Vec<String>,
    assignments: HashMap<String, Assignment>,
}

impl OrderedVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to `key`, moving `key` to the end of iteration order.
    pub fn insert(&mut self, key: String, value: String) {
        let pattern = match self.assignments.remove(&key) {
            Some(previous) => {
                self.order.retain(|existing| existing != &key);
                previous.pattern
            }
            None => OnceCell::new(),
        };
        self.order.push(key.clone());
        self.assignments.insert(key, Assignment { value, pattern });
    }

    /// Expands `raw` against every assignment, oldest first.
    ///
    /// Substitutions compound: each step sees the output of the previous one.
    pub fn expand(&self, raw: &str) -> String {
        let mut value = raw.to_string();
        for key in &self.order {
            if !may_reference(&value) {
                break;
            }
            let assignment = &self.assignments[key];
            if let Some(pattern) = assignment.pattern.get_or_init(|| reference_pattern(key)) {
                value = replace_references(&value, pattern, &assignment.value);
            }
        }
        value
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.assignments.get(key).map(|a| a.value.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    fn compiled_patterns(&self) -> usize {
        self.assignments
            .values()
            .filter(|a| a.pattern.get().is_some())
            .count()
    }

    #[cfg(test)]
    fn keys(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

impl From<OrderedVars> for VariableSet {
    fn from(vars: OrderedVars) -> Self {
        vars.assignments
            .into_iter()
            .map(|(key, assignment)| (key, assignment.value))
            .collect()
    }
}
