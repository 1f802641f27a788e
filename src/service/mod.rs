//! Environment variable service bound to one platform.

use std::path::Path;

use crate::config::{Platform, PlatformLoader};
use crate::variables::{self, VariableSet, PYTHONPATH};
use crate::Error;

/// Reads definitions files and combines variable sets for a fixed [`Platform`].
///
/// The platform decides which variable is the executable search path and how
/// list variables are joined. It is set at construction and never changes.
///
/// ## Example
///
/// ```no_run
/// use envdefs::{EnvironmentService, VariableSet};
/// use std::path::Path;
///
/// let service = EnvironmentService::default();
/// let mut env: VariableSet = std::env::vars().collect();
///
/// if let Some(defs) = service.parse_file(Some(Path::new(".env")))? {
///     service.merge_variables(&defs, Some(&mut env));
/// }
/// service.append_python_path(&mut env, ["/opt/project/src"]);
/// # Ok::<(), envdefs::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentService {
    platform: Platform,
}

impl EnvironmentService {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Builds a service from platform settings loaded by `loader`.
    pub fn load(loader: PlatformLoader) -> Result<Self, Error> {
        Ok(Self::new(loader.load()?))
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Parses the definitions file at `path`.
    ///
    /// A missing path, a nonexistent file or anything that is not a regular
    /// file yields `Ok(None)`: there are simply no definitions.
    pub fn parse_file(&self, path: Option<&Path>) -> Result<Option<VariableSet>, Error> {
        variables::parse_file(path)
    }

    /// Adds variables from `source` that `target` does not define yet.
    ///
    /// `PYTHONPATH` and the platform path variable are never merged; use
    /// [`append_python_path`](Self::append_python_path) and
    /// [`append_path`](Self::append_path) for those.
    pub fn merge_variables(&self, source: &VariableSet, target: Option<&mut VariableSet>) {
        let reserved = [PYTHONPATH, self.platform.path_variable.as_str()];
        variables::merge(source, target, &reserved);
    }

    /// Appends entries to the executable search path variable.
    pub fn append_path<'a, I, S>(&self, vars: &'a mut VariableSet, paths: I) -> &'a mut VariableSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        variables::append_paths(
            vars,
            &self.platform.path_variable,
            self.platform.list_delimiter,
            paths,
        )
    }

    /// Appends entries to `PYTHONPATH`.
    pub fn append_python_path<'a, I, S>(
        &self,
        vars: &'a mut VariableSet,
        paths: I,
    ) -> &'a mut VariableSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        variables::append_paths(vars, PYTHONPATH, self.platform.list_delimiter, paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn unix() -> EnvironmentService {
        EnvironmentService::new(Platform::new("PATH", ':'))
    }

    fn windows() -> EnvironmentService {
        EnvironmentService::new(Platform::new("Path", ';'))
    }

    fn vars(pairs: &[(&str, &str)]) -> VariableSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_excludes_list_variables() {
        let source = vars(&[("PYTHONPATH", "x"), ("PATH", "y"), ("FOO", "z")]);
        let mut target = VariableSet::new();

        unix().merge_variables(&source, Some(&mut target));

        assert_eq!(target, vars(&[("FOO", "z")]));
    }

    #[test]
    fn test_merge_excludes_platform_spelling() {
        let source = vars(&[("Path", "y"), ("PATH", "w")]);
        let mut target = VariableSet::new();

        windows().merge_variables(&source, Some(&mut target));

        assert_eq!(target, vars(&[("PATH", "w")]));
    }

    #[test]
    fn test_append_path_uses_platform() {
        let mut env = vars(&[("Path", "C:\\Windows")]);

        windows().append_path(&mut env, [" C:\\Tools ", ""]);

        assert_eq!(env["Path"], "C:\\Windows;C:\\Tools");
    }

    #[test]
    fn test_append_python_path_chains() {
        let service = unix();
        let mut env = VariableSet::new();

        service
            .append_python_path(&mut env, ["/a"])
            .insert("EXTRA".into(), "1".into());
        service.append_python_path(&mut env, vec!["/b".to_string()]);

        assert_eq!(env["PYTHONPATH"], "/a:/b");
        assert_eq!(env["EXTRA"], "1");
    }

    #[test]
    fn test_parse_merge_append_flow() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ROOT=/srv/app").unwrap();
        writeln!(file, "PYTHONPATH=%ROOT%/lib").unwrap();
        writeln!(file, "HOME=/ignored").unwrap();
        writeln!(file, "MODE=dev").unwrap();

        let service = unix();
        let defs = service.parse_file(Some(file.path())).unwrap().unwrap();
        let mut env = vars(&[("HOME", "/root"), ("PYTHONPATH", "/site")]);

        service.merge_variables(&defs, Some(&mut env));
        service.append_python_path(&mut env, [defs["PYTHONPATH"].as_str()]);

        assert_eq!(env["HOME"], "/root");
        assert_eq!(env["MODE"], "dev");
        assert_eq!(env["ROOT"], "/srv/app");
        assert_eq!(env["PYTHONPATH"], "/site:/srv/app/lib");
    }

    #[test]
    fn test_parse_file_absent() {
        let service = unix();
        assert!(service.parse_file(None).unwrap().is_none());
        assert!(service
            .parse_file(Some(Path::new("/nonexistent")))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_load_reports_config_errors() {
        let loader = PlatformLoader::new().with_file("/nonexistent/platform.toml", true);

        let result = EnvironmentService::load(loader);

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
