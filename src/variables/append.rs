use super::VariableSet;

/// Appends path fragments to the list variable `name`.
///
/// Fragments are trimmed and empty ones dropped. The rest are joined with
/// `delimiter` and appended to the current value, or become the value if the
/// variable is unset or empty. Returns `vars` untouched when no fragment
/// remains.
pub fn append_paths<'a, I, S>(
    vars: &'a mut VariableSet,
    name: &str,
    delimiter: char,
    fragments: I,
) -> &'a mut VariableSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let separator = delimiter.to_string();
    let to_append = fragments
        .into_iter()
        .filter_map(|fragment| {
            let fragment = fragment.as_ref().trim();
            (!fragment.is_empty()).then(|| fragment.to_string())
        })
        .collect::<Vec<_>>()
        .join(&separator);

    if to_append.is_empty() {
        return vars;
    }

    match vars.get_mut(name) {
        Some(existing) if !existing.is_empty() => {
            existing.push(delimiter);
            existing.push_str(&to_append);
        }
        _ => {
            vars.insert(name.to_string(), to_append);
        }
    }
    vars
}
