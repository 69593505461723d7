//! Run settings
//!
//! Values come from built-in defaults, then `RF_DOCS_*` environment variables,
//! then command line flags applied by the binaries.

use std::path::{Path, PathBuf};

/// Default docker executable
pub const DEFAULT_DOCKER: &str = "docker";

/// Default docs server container name
pub const DEFAULT_CONTAINER: &str = "rf-docs-mcp";

/// Docs directory inside the container
pub const DEFAULT_CONTAINER_DOCS_DIR: &str = "/app/docs";

/// Environment variable overriding the project root
pub const ENV_PROJECT_ROOT: &str = "RF_DOCS_PROJECT_ROOT";
/// Environment variable overriding the docker executable
pub const ENV_DOCKER: &str = "RF_DOCS_DOCKER";
/// Environment variable overriding the container name
pub const ENV_CONTAINER: &str = "RF_DOCS_CONTAINER";
/// Environment variable overriding the host docs directory
pub const ENV_DOCS_DIR: &str = "RF_DOCS_DIR";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit project root; discovered from the working directory when unset
    pub project_root: Option<PathBuf>,
    /// Docker executable
    pub docker: String,
    /// Container running the docs server
    pub container: String,
    /// Where libdoc writes inside the container
    pub container_docs_dir: String,
    /// Host directory holding generated docs; `<root>/docs` when unset
    pub host_docs_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: None,
            docker: DEFAULT_DOCKER.to_string(),
            container: DEFAULT_CONTAINER.to_string(),
            container_docs_dir: DEFAULT_CONTAINER_DOCS_DIR.to_string(),
            host_docs_dir: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; empty values are ignored
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            project_root: get(ENV_PROJECT_ROOT).map(PathBuf::from),
            docker: get(ENV_DOCKER).unwrap_or(defaults.docker),
            container: get(ENV_CONTAINER).unwrap_or(defaults.container),
            container_docs_dir: defaults.container_docs_dir,
            host_docs_dir: get(ENV_DOCS_DIR).map(PathBuf::from),
        }
    }

    /// Override the project root
    pub fn project_root(mut self, root: Option<PathBuf>) -> Self {
        if root.is_some() {
            self.project_root = root;
        }
        self
    }

    /// Override the container name
    pub fn container(mut self, container: Option<String>) -> Self {
        if let Some(container) = container {
            self.container = container;
        }
        self
    }

    /// Host docs directory for a project rooted at `root`
    pub fn docs_dir(&self, root: &Path) -> PathBuf {
        self.host_docs_dir
            .clone()
            .unwrap_or_else(|| root.join("docs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.docs_dir(Path::new("/proj")), PathBuf::from("/proj/docs"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_PROJECT_ROOT, "/srv/proj"),
            (ENV_DOCKER, "podman"),
            (ENV_CONTAINER, ""),
            (ENV_DOCS_DIR, "/srv/docs"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.project_root, Some(PathBuf::from("/srv/proj")));
        assert_eq!(settings.docker, "podman");
        assert_eq!(settings.container, DEFAULT_CONTAINER);
        assert_eq!(settings.docs_dir(Path::new("/proj")), PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_cli_overrides_env() {
        let settings = Settings::from_lookup(|k| (k == ENV_PROJECT_ROOT).then(|| "/env".to_string()))
            .project_root(Some(PathBuf::from("/cli")))
            .container(Some("custom".to_string()));
        assert_eq!(settings.project_root, Some(PathBuf::from("/cli")));
        assert_eq!(settings.container, "custom");

        let kept = Settings::from_lookup(|k| (k == ENV_PROJECT_ROOT).then(|| "/env".to_string()))
            .project_root(None);
        assert_eq!(kept.project_root, Some(PathBuf::from("/env")));
    }
}
