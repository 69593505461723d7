//! Selector to profile mapping

use super::config::{ExtraSettings, Profile, SchemaShape, ServerEntry};
use crate::error::{RfDocsError, Result};
use std::str::FromStr;

/// Supported integration targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Claude Code project config (`.mcp.json` at the project root)
    Claude,
    /// Cursor (`.cursor/mcp.json`)
    Cursor,
    /// VS Code (`.vscode/mcp.json`)
    Vscode,
    /// Cline (`.cline/mcp_settings.json`), also registers the rf-mcp server
    Cline,
}

const CLAUDE: Profile = Profile {
    selector: "claude",
    output_directory: "",
    file_stem: ".mcp",
    schema: SchemaShape::Standard,
    extra_settings: None,
};

const CURSOR: Profile = Profile {
    selector: "cursor",
    output_directory: ".cursor",
    file_stem: "mcp",
    schema: SchemaShape::Standard,
    extra_settings: None,
};

const VSCODE: Profile = Profile {
    selector: "vscode",
    output_directory: ".vscode",
    file_stem: "mcp",
    schema: SchemaShape::Simplified,
    extra_settings: None,
};

const CLINE: Profile = Profile {
    selector: "cline",
    output_directory: ".cline",
    file_stem: "mcp_settings",
    schema: SchemaShape::Standard,
    extra_settings: Some(ExtraSettings {
        key: "rf-mcp",
        entry: ServerEntry {
            command: "uvx",
            args: &["rf-mcp"],
        },
    }),
};

impl Selector {
    /// All selectors, in display order
    pub const ALL: [Selector; 4] = [
        Selector::Claude,
        Selector::Cursor,
        Selector::Vscode,
        Selector::Cline,
    ];

    /// Token used on the command line
    pub fn as_str(&self) -> &'static str {
        self.profile().selector
    }

    /// Profile for this selector
    pub fn profile(&self) -> Profile {
        match self {
            Selector::Claude => CLAUDE,
            Selector::Cursor => CURSOR,
            Selector::Vscode => VSCODE,
            Selector::Cline => CLINE,
        }
    }

    /// Comma separated list of valid tokens
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Selector {
    type Err = RfDocsError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        if token.is_empty() {
            return Err(RfDocsError::EmptySelector {
                valid: Self::valid_list(),
            });
        }

        Self::ALL
            .into_iter()
            .find(|selector| selector.as_str() == token)
            .ok_or_else(|| RfDocsError::UnknownSelector {
                given: token.to_string(),
                valid: Self::valid_list(),
            })
    }
}

/// Resolve a selector token to its profile
pub fn resolve(selector: &str) -> Result<Profile> {
    selector.parse::<Selector>().map(|s| s.profile())
}

/// Every profile, in display order
pub fn profiles() -> impl Iterator<Item = Profile> {
    Selector::ALL.into_iter().map(|s| s.profile())
}
