//! Minimal view of a Docker Compose file
//!
//! Only the fields needed to check that the docs server container is declared
//! are modelled; everything else in the file is ignored.

use crate::error::{RfDocsError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Compose file names, in lookup order
pub const DEFAULT_COMPOSE_FILES: &[&str] = &[
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Parsed compose file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeFile {
    /// Services by name
    #[serde(default)]
    pub services: BTreeMap<String, ComposeService>,
}

/// Service entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposeService {
    /// Fixed container name
    #[serde(default)]
    pub container_name: Option<String>,
}

impl ComposeFile {
    /// Parse a compose file from disk
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RfDocsError::io(path, e))?;
        Self::parse_str(&content).map_err(|message| RfDocsError::ComposeParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse compose YAML
    pub fn parse_str(content: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse YAML: {}", e))
    }

    /// Explicit container names declared by services
    pub fn container_names(&self) -> Vec<&str> {
        self.services
            .values()
            .filter_map(|s| s.container_name.as_deref())
            .collect()
    }

    /// Whether a service declares `container_name: <name>`
    pub fn declares_container(&self, name: &str) -> bool {
        self.container_names().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_container_names() {
        let yaml = r#"
services:
  rf-docs:
    build: .
    container_name: rf-docs-mcp
    stdin_open: true
    volumes:
      - ./docs:/app/docs
  other:
    image: redis
"#;

        let compose = ComposeFile::parse_str(yaml).unwrap();
        assert_eq!(compose.services.len(), 2);
        assert_eq!(compose.container_names(), vec!["rf-docs-mcp"]);
        assert!(compose.declares_container("rf-docs-mcp"));
        assert!(!compose.declares_container("redis"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(ComposeFile::parse_str("services: [unclosed").is_err());
    }

    #[test]
    fn test_empty_file() {
        let compose = ComposeFile::parse_str("{}").unwrap();
        assert!(compose.services.is_empty());
    }
}
