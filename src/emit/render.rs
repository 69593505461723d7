//! JSON rendering for profiles

use crate::error::{RfDocsError, Result};
use crate::profile::{Profile, SchemaShape, ServerEntry, ENTRY_KEY, WRAPPER_KEY};
use serde_json::{Map, Value};

/// Build the JSON document for a profile
pub fn render(profile: &Profile) -> Result<Value> {
    let mut servers = Map::new();
    servers.insert(ENTRY_KEY.to_string(), serde_json::to_value(ServerEntry::DOCS)?);

    if let Some(ref extra) = profile.extra_settings {
        if servers.contains_key(extra.key) {
            return Err(RfDocsError::InvalidConfig(format!(
                "extra settings key '{}' of profile '{}' collides with an existing entry",
                extra.key, profile.selector
            )));
        }
        servers.insert(extra.key.to_string(), serde_json::to_value(&extra.entry)?);
    }

    let document = match profile.schema {
        SchemaShape::Simplified => servers,
        SchemaShape::Standard => {
            let mut wrapper = Map::new();
            wrapper.insert(WRAPPER_KEY.to_string(), Value::Object(servers));
            wrapper
        }
    };

    Ok(Value::Object(document))
}

/// Render a profile to the exact text written to disk
pub fn render_text(profile: &Profile) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&render(profile)?)?;
    text.push('\n');
    Ok(text)
}
