//! rfdocs - setup tooling for the Robot Framework documentation MCP server
//!
//! The docs server runs in a container named `rf-docs-mcp`. This crate
//! provides:
//!
//! - MCP client configuration for Claude, Cursor, VS Code and Cline
//! - A fast start sequence that writes the config and (re)starts the container
//! - Library documentation generation through libdoc
//! - Offline keyword lookup over the generated documentation

pub mod cli;
pub mod emit;
pub mod error;
pub mod libdoc;
pub mod process;
pub mod profile;
pub mod project;
pub mod settings;
pub mod workflow;

pub use emit::emit;
pub use error::{Result, RfDocsError};
pub use profile::{resolve, Profile, Selector};
pub use settings::Settings;
