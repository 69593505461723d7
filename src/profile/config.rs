//! Profile data and the fixed server entry

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Key naming the documentation server inside every emitted file
pub const ENTRY_KEY: &str = "docs";

/// Reserved key that wraps server entries in the standard shape
pub const WRAPPER_KEY: &str = "mcpServers";

/// Command the MCP client runs to reach the server container
pub const DOCS_SERVER_COMMAND: &str = "/usr/bin/docker";

/// Arguments passed to [`DOCS_SERVER_COMMAND`]
pub const DOCS_SERVER_ARGS: [&str; 5] = [
    "exec",
    "-i",
    "rf-docs-mcp",
    "python",
    "/app/rf_docs_server.py",
];

/// JSON shape expected by an MCP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaShape {
    /// Entries at the top level: `{"docs": {...}}`
    Simplified,
    /// Entries under [`WRAPPER_KEY`]: `{"mcpServers": {"docs": {...}}}`
    Standard,
}

impl std::fmt::Display for SchemaShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            SchemaShape::Simplified => "simplified",
            SchemaShape::Standard => "standard",
        })
    }
}

/// A stdio MCP server entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEntry {
    /// Executable to launch
    pub command: &'static str,
    /// Arguments, in order
    pub args: &'static [&'static str],
}

impl ServerEntry {
    /// The documentation server entry written by every profile
    pub const DOCS: ServerEntry = ServerEntry {
        command: DOCS_SERVER_COMMAND,
        args: &DOCS_SERVER_ARGS,
    };
}

/// Additional key/value pair placed next to the `docs` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSettings {
    /// Key inserted into the innermost object
    pub key: &'static str,
    /// Value stored under `key`
    pub entry: ServerEntry,
}

/// How to render configuration for one integration target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Selector token (`claude`, `cursor`, ...)
    pub selector: &'static str,
    /// Directory relative to the project root; empty means the root itself
    pub output_directory: &'static str,
    /// File name without the `.json` extension
    pub file_stem: &'static str,
    /// JSON shape to render
    pub schema: SchemaShape,
    /// Optional sibling of the `docs` entry
    pub extra_settings: Option<ExtraSettings>,
}

impl Profile {
    /// Whether this profile renders the flat shape
    pub fn uses_simplified_schema(&self) -> bool {
        self.schema == SchemaShape::Simplified
    }

    /// File name including extension
    pub fn file_name(&self) -> String {
        format!("{}.json", self.file_stem)
    }

    /// Directory the file is written to under `project_root`
    pub fn target_dir(&self, project_root: &Path) -> PathBuf {
        if self.output_directory.is_empty() {
            project_root.to_path_buf()
        } else {
            project_root.join(self.output_directory)
        }
    }

    /// Full path of the emitted file under `project_root`
    pub fn target_path(&self, project_root: &Path) -> PathBuf {
        self.target_dir(project_root).join(self.file_name())
    }

    /// Path relative to the project root, for display
    pub fn relative_path(&self) -> PathBuf {
        self.target_path(Path::new(""))
    }
}
