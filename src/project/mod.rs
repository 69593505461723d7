//! Project root discovery
//!
//! The project root is the directory holding the compose file for the docs
//! server container. Config files are always written relative to it.

pub mod compose;

pub use compose::{ComposeFile, ComposeService, DEFAULT_COMPOSE_FILES};

use crate::error::{RfDocsError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A located project
#[derive(Debug, Clone)]
pub struct Project {
    /// Project root directory
    pub root: PathBuf,
    /// Compose file inside `root`, if any
    pub compose_file: Option<PathBuf>,
}

impl Project {
    /// Use `root`, which must be an existing directory
    ///
    /// A relative `root` is taken from the working directory.
    pub fn at(root: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| RfDocsError::io(".", e))?;
        Self::at_within(root, &cwd)
    }

    /// Use `root`, resolving a relative path against `base`
    ///
    /// Child processes run from the root and get the compose file path, so
    /// both must stay valid whatever their working directory is.
    fn at_within(root: &Path, base: &Path) -> Result<Self> {
        let root = base.join(root);
        if !root.is_dir() {
            return Err(RfDocsError::InvalidProjectRoot(root));
        }
        Ok(Self {
            compose_file: find_compose_file(&root),
            root,
        })
    }

    /// Walk up from `start` to the first directory with a compose file
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            if let Some(compose_file) = find_compose_file(dir) {
                debug!("Found compose file {}", compose_file.display());
                return Ok(Self {
                    root: dir.to_path_buf(),
                    compose_file: Some(compose_file),
                });
            }
        }
        Err(RfDocsError::ProjectRootNotFound(start.to_path_buf()))
    }

    /// Explicit root when given, discovery from `start` otherwise
    ///
    /// `start` is the working directory; a relative explicit root is taken
    /// from it.
    pub fn locate(explicit: Option<&Path>, start: &Path) -> Result<Self> {
        match explicit {
            Some(root) => Self::at_within(root, start),
            None => Self::discover(start),
        }
    }

    /// Parse the compose file, if the project has one
    pub fn compose(&self) -> Result<Option<ComposeFile>> {
        self.compose_file
            .as_deref()
            .map(ComposeFile::parse_file)
            .transpose()
    }
}

/// Find a compose file directly inside `dir`
pub fn find_compose_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_COMPOSE_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_walks_up() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("docker-compose.yml"), "services: {}\n").unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let project = Project::discover(&nested).unwrap();
        assert_eq!(project.root, temp.path());
        assert_eq!(
            project.compose_file,
            Some(temp.path().join("docker-compose.yml"))
        );
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("compose.yaml"), "services: {}\n").unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("docker-compose.yaml"), "services: {}\n").unwrap();

        assert_eq!(Project::discover(&inner).unwrap().root, inner);
    }

    #[test]
    fn test_explicit_root_must_exist() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");
        assert!(matches!(
            Project::locate(Some(&missing), temp.path()),
            Err(RfDocsError::InvalidProjectRoot(_))
        ));

        let project = Project::locate(Some(temp.path()), Path::new("/")).unwrap();
        assert_eq!(project.root, temp.path());
        assert!(project.compose_file.is_none());
        assert!(project.compose().unwrap().is_none());
    }

    #[test]
    fn test_relative_explicit_root_is_made_absolute() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("proj");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("compose.yml"), "services: {}\n").unwrap();

        let project = Project::locate(Some(Path::new("proj")), temp.path()).unwrap();
        assert!(project.root.is_absolute());
        assert_eq!(project.root, root);
        assert_eq!(project.compose_file, Some(root.join("compose.yml")));
    }
}
