use toml::{Table, Value};

/// Copies `{prefix}{separator}{FIELD}` process variables into `table`.
///
/// The field name is lowercased, so `ENVDEFS__PATH_VARIABLE` sets
/// `path_variable`. Values stay strings.
pub(super) fn load_env_vars(table: &mut Table, prefix: &str, separator: &str) {
    let prefix_with_sep = format!("{prefix}{separator}");

    for (key, value) in std::env::vars() {
        let Some(field) = key.strip_prefix(&prefix_with_sep) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        tracing::debug!(variable = %key, "platform override from environment");
        table.insert(field.to_lowercase(), Value::String(value));
    }
}
