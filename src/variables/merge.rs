use super::VariableSet;

/// Copies variables from `source` into `target` without overwriting.
///
/// Names listed in `reserved` are never copied; everything else is only
/// added when `target` does not define it yet. Does nothing when `target`
/// is `None`.
pub fn merge(source: &VariableSet, target: Option<&mut VariableSet>, reserved: &[&str]) {
    let Some(target) = target else {
        return;
    };

    for (name, value) in source {
        if reserved.contains(&name.as_str()) {
            tracing::trace!(name = %name, "not merging reserved variable");
            continue;
        }
        target
            .entry(name.clone())
            .or_insert_with(|| value.clone());
    }
}
