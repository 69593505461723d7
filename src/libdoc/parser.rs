//! libdoc model extraction
//!
//! libdoc's HTML output embeds the library model as a JavaScript assignment,
//! `libdoc = {...};`. The JSON output format carries the same model as a
//! plain document.

use crate::error::{RfDocsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A documented keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub name: String,
    pub library: String,
    /// Argument signature, e.g. `first, second, msg=None`
    pub args: String,
    /// Short documentation as plain text
    pub doc: String,
    pub source: Option<String>,
    pub lineno: Option<u64>,
}

/// Keywords of one library, keyed by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDoc {
    pub name: String,
    pub keywords: BTreeMap<String, Keyword>,
}

#[derive(Debug, Deserialize)]
struct RawLibrary {
    #[serde(default)]
    keywords: Vec<RawKeyword>,
}

#[derive(Debug, Deserialize)]
struct RawKeyword {
    #[serde(default)]
    name: String,
    #[serde(default)]
    args: Vec<RawArgument>,
    #[serde(default)]
    shortdoc: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    lineno: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawArgument {
    #[serde(default)]
    repr: String,
}

fn libdoc_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"libdoc\s*=\s*\{").expect("valid regex"))
}

pub(super) fn html_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn inline_code() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"``([^`]+)``").expect("valid regex"))
}

/// Slice the `libdoc = {...}` object out of libdoc HTML
///
/// The end of the object is found by counting braces, ignoring braces that
/// appear inside JSON strings.
pub fn extract_libdoc_json<'h>(html: &'h str, source: &str) -> Result<&'h str> {
    let start = libdoc_start()
        .find(html)
        .map(|m| m.end() - 1)
        .ok_or_else(|| RfDocsError::LibdocNotFound(source.to_string()))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape = false;

    for (offset, byte) in html.as_bytes()[start..].iter().enumerate() {
        if escape {
            escape = false;
            continue;
        }
        match byte {
            b'\\' => escape = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&html[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Err(RfDocsError::UnterminatedLibdoc(source.to_string()))
}

/// Strip markup from a libdoc short doc
pub fn plain_text(doc: &str) -> String {
    let without_tags = html_tag().replace_all(doc, "");
    inline_code().replace_all(&without_tags, "$1").into_owned()
}

/// Parse a library from libdoc HTML or JSON output
pub fn parse_library(name: &str, text: &str) -> Result<LibraryDoc> {
    let json = if text.trim_start().starts_with('{') {
        text
    } else {
        extract_libdoc_json(text, name)?
    };
    let raw: RawLibrary = serde_json::from_str(json)?;

    let keywords = raw
        .keywords
        .into_iter()
        .filter(|kw| !kw.name.is_empty())
        .map(|kw| {
            let args = kw
                .args
                .iter()
                .map(|a| a.repr.as_str())
                .filter(|r| !r.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let keyword = Keyword {
                name: kw.name.clone(),
                library: name.to_string(),
                args,
                doc: plain_text(&kw.shortdoc),
                source: kw.source,
                lineno: kw.lineno,
            };
            (kw.name, keyword)
        })
        .collect();

    Ok(LibraryDoc {
        name: name.to_string(),
        keywords,
    })
}
