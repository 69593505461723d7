//! Integration target profiles
//!
//! Each supported MCP client is described by a constant [`Profile`] that says
//! where its configuration file lives and which JSON shape it expects.

pub mod config;
pub mod registry;

pub use config::{
    ExtraSettings, Profile, SchemaShape, ServerEntry, DOCS_SERVER_ARGS, DOCS_SERVER_COMMAND,
    ENTRY_KEY, WRAPPER_KEY,
};
pub use registry::{profiles, resolve, Selector};
