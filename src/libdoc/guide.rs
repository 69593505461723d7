//! User Guide search
//!
//! Splits a locally saved Robot Framework User Guide into `<h1>`..`<h4>`
//! sections and ranks them against a query. A title hit weighs ten content
//! hits.

use super::parser::html_tag;
use super::{user_guide_url, RF_VERSION};
use crate::error::{RfDocsError, Result};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// User Guide file name inside the docs directory
pub const USER_GUIDE_FILE: &str = "RobotFrameworkUserGuide.html";

/// Results returned when no limit is given
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Characters of section content shown per hit
pub const PREVIEW_LIMIT: usize = 300;

const TITLE_WEIGHT: usize = 10;

fn heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<h([1-4])\b([^>]*)>(.*?)</h[1-4]\s*>").expect("valid regex"))
}

fn id_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)(?:^|\s)id\s*=\s*["']([^"']*)["']"#).expect("valid regex"))
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// One heading and the text up to the next heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub level: u8,
    pub title: String,
    pub content: String,
}

/// A ranked section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub id: String,
    pub level: u8,
    pub relevance: usize,
    pub content_preview: String,
    pub url: String,
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub version: &'static str,
    pub query: String,
    /// Matching sections before the limit was applied
    pub total_matches: usize,
    pub results: Vec<SearchHit>,
}

/// Sections of the User Guide
#[derive(Debug, Clone, Default)]
pub struct UserGuide {
    sections: Vec<Section>,
}

impl UserGuide {
    /// Load `RobotFrameworkUserGuide.html` from `docs_dir`
    pub fn load(docs_dir: &Path) -> Result<Self> {
        let path = docs_dir.join(USER_GUIDE_FILE);
        if !path.is_file() {
            return Err(RfDocsError::UserGuideNotFound(path));
        }
        let html = std::fs::read_to_string(&path).map_err(|e| RfDocsError::io(&path, e))?;
        let guide = Self::parse(&html);
        debug!("Indexed {} sections from {}", guide.sections.len(), path.display());
        Ok(guide)
    }

    /// Split User Guide HTML into sections; text before the first heading is dropped
    pub fn parse(html: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        let mut body_start = None;

        for caps in heading().captures_iter(html) {
            let (Some(whole), Some(level), Some(attrs), Some(inner)) =
                (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };
            if let (Some(start), Some(last)) = (body_start, sections.last_mut()) {
                last.content = text(&html[start..whole.start()]);
            }

            sections.push(Section {
                id: id_attr()
                    .captures(attrs.as_str())
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                level: level.as_str().parse().unwrap_or(1),
                title: text(inner.as_str()),
                content: String::new(),
            });
            body_start = Some(whole.end());
        }

        if let (Some(start), Some(last)) = (body_start, sections.last_mut()) {
            last.content = text(&html[start..]);
        }
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Rank sections containing `query`, case-insensitively
    pub fn search(&self, query: &str, max_results: usize) -> Result<SearchResults> {
        if query.trim().is_empty() {
            return Err(RfDocsError::EmptyQuery);
        }
        let wanted = query.to_lowercase();

        let mut hits: Vec<SearchHit> = self
            .sections
            .iter()
            .filter_map(|section| {
                let title_matches = section.title.to_lowercase().matches(&wanted).count();
                let content_matches = section.content.to_lowercase().matches(&wanted).count();
                if title_matches == 0 && content_matches == 0 {
                    return None;
                }
                Some(SearchHit {
                    title: section.title.clone(),
                    id: section.id.clone(),
                    level: section.level,
                    relevance: title_matches * TITLE_WEIGHT + content_matches,
                    content_preview: preview(&section.content),
                    url: format!("{}#{}", user_guide_url(), section.id),
                })
            })
            .collect();

        // Stable, so equal scores keep document order
        hits.sort_by(|a, b| b.relevance.cmp(&a.relevance));
        let total_matches = hits.len();
        hits.truncate(max_results);

        Ok(SearchResults {
            version: RF_VERSION,
            query: query.to_string(),
            total_matches,
            results: hits,
        })
    }
}

fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_LIMIT).collect();
    preview.push_str("...");
    preview
}

/// Visible text of an HTML fragment with whitespace collapsed
fn text(fragment: &str) -> String {
    let stripped = html_tag().replace_all(fragment, " ");
    let decoded = decode_entities(&stripped);
    whitespace().replace_all(&decoded, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
