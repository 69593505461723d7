//! Error types for rfdocs

use std::path::PathBuf;
use thiserror::Error;

/// Result type for rfdocs operations
pub type Result<T> = std::result::Result<T, RfDocsError>;

/// rfdocs error types
#[derive(Error, Debug)]
pub enum RfDocsError {
    #[error("Selector must not be empty (valid selectors: {valid})")]
    EmptySelector { valid: String },

    #[error("Unknown selector '{given}' (valid selectors: {valid})")]
    UnknownSelector { given: String, valid: String },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Compose file parse error in {}: {message}", .path.display())]
    ComposeParse { path: PathBuf, message: String },

    #[error("No compose file found in {} or any parent directory", .0.display())]
    ProjectRootNotFound(PathBuf),

    #[error("Project root is not a directory: {}", .0.display())]
    InvalidProjectRoot(PathBuf),

    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {}", exit_description(.code))]
    ProcessFailed { command: String, code: Option<i32> },

    #[error("Could not find libdoc model in {0}")]
    LibdocNotFound(String),

    #[error("Could not find end of libdoc model in {0}")]
    UnterminatedLibdoc(String),

    #[error("No library documentation found in {}; run `rfdocs docs` first", .0.display())]
    DocsNotFound(PathBuf),

    #[error("User Guide not found at {}; save RobotFrameworkUserGuide.html there first", .0.display())]
    UserGuideNotFound(PathBuf),

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Library '{name}' not found (available libraries: {available})")]
    LibraryNotFound { name: String, available: String },

    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RfDocsError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RfDocsError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code this error should map to
    pub fn exit_code(&self) -> i32 {
        match self {
            RfDocsError::ProcessFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
