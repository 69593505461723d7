//! Keyword index over generated library docs

use super::parser::{parse_library, Keyword, LibraryDoc};
use super::keyword_url;
use crate::error::{RfDocsError, Result};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Longest description shown in keyword listings
pub const DESCRIPTION_LIMIT: usize = 200;

/// Listing entry for a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSummary {
    pub name: String,
    pub library: String,
    pub args: String,
    pub description: String,
}

impl From<&Keyword> for KeywordSummary {
    fn from(keyword: &Keyword) -> Self {
        Self {
            name: keyword.name.clone(),
            library: keyword.library.clone(),
            args: keyword.args.clone(),
            description: keyword.doc.chars().take(DESCRIPTION_LIMIT).collect(),
        }
    }
}

/// Keywords of one library, sorted by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryKeywords {
    pub library: String,
    pub keywords: Vec<KeywordSummary>,
}

/// Result of an availability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub keyword_searched: String,
    pub available: bool,
    pub library: Option<String>,
    pub keyword_actual_name: Option<String>,
    pub url: Option<String>,
}

/// Keywords of every loaded library
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    libraries: Vec<LibraryDoc>,
}

impl KeywordIndex {
    /// Build an index from already parsed libraries
    pub fn from_libraries(libraries: Vec<LibraryDoc>) -> Self {
        Self { libraries }
    }

    /// Load `libraries` from `docs_dir`
    ///
    /// `<Library>.html` is preferred over `<Library>.json`. Libraries with no
    /// file are skipped; unreadable ones are skipped with a warning.
    pub fn load(docs_dir: &Path, libraries: &[&str]) -> Result<Self> {
        if !docs_dir.is_dir() {
            return Err(RfDocsError::DocsNotFound(docs_dir.to_path_buf()));
        }

        let mut loaded = Vec::new();
        for library in libraries {
            let Some(path) = library_file(docs_dir, library) else {
                debug!("No documentation for {} in {}", library, docs_dir.display());
                continue;
            };

            let parsed = std::fs::read_to_string(&path)
                .map_err(|e| RfDocsError::io(&path, e))
                .and_then(|text| parse_library(library, &text));
            match parsed {
                Ok(doc) => {
                    debug!("Loaded {} keywords from {}", doc.keywords.len(), path.display());
                    loaded.push(doc);
                }
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }

        if loaded.is_empty() {
            return Err(RfDocsError::DocsNotFound(docs_dir.to_path_buf()));
        }
        Ok(Self::from_libraries(loaded))
    }

    /// Names of the loaded libraries
    pub fn library_names(&self) -> Vec<&str> {
        self.libraries.iter().map(|l| l.name.as_str()).collect()
    }

    /// Total keyword count
    pub fn keyword_count(&self) -> usize {
        self.libraries.iter().map(|l| l.keywords.len()).sum()
    }

    /// Keywords of one library, optionally filtered by a case-insensitive regex
    pub fn library(&self, name: &str, filter: Option<&str>) -> Result<LibraryKeywords> {
        let pattern = compile_filter(filter)?;
        let library = self.get(name)?;
        Ok(summarize(library, pattern.as_ref()))
    }

    /// Keywords of every library; libraries left empty by the filter are dropped
    pub fn all(&self, filter: Option<&str>) -> Result<Vec<LibraryKeywords>> {
        let pattern = compile_filter(filter)?;
        Ok(self
            .libraries
            .iter()
            .map(|l| summarize(l, pattern.as_ref()))
            .filter(|l| !l.keywords.is_empty())
            .collect())
    }

    /// Look a keyword up by name, ignoring case, `_` and `-`
    pub fn find(&self, keyword: &str, library: Option<&str>) -> Result<Option<&Keyword>> {
        let libraries: Vec<&LibraryDoc> = match library {
            Some(name) => vec![self.get(name)?],
            None => self.libraries.iter().collect(),
        };

        let wanted = normalize(keyword);
        Ok(libraries
            .into_iter()
            .flat_map(|l| l.keywords.values())
            .find(|k| normalize(&k.name) == wanted))
    }

    /// Whether a keyword exists in any loaded library
    pub fn check(&self, keyword: &str) -> Availability {
        // find without a library filter cannot fail
        let found = self.find(keyword, None).ok().flatten();
        Availability {
            keyword_searched: keyword.to_string(),
            available: found.is_some(),
            library: found.map(|k| k.library.clone()),
            keyword_actual_name: found.map(|k| k.name.clone()),
            url: found.map(|k| keyword_url(&k.library, &k.name)),
        }
    }

    fn get(&self, name: &str) -> Result<&LibraryDoc> {
        self.libraries
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| RfDocsError::LibraryNotFound {
                name: name.to_string(),
                available: self.library_names().join(", "),
            })
    }
}

fn library_file(docs_dir: &Path, library: &str) -> Option<PathBuf> {
    ["html", "json"]
        .iter()
        .map(|ext| docs_dir.join(format!("{}.{}", library, ext)))
        .find(|p| p.is_file())
}

fn compile_filter(filter: Option<&str>) -> Result<Option<Regex>> {
    filter
        .filter(|f| !f.is_empty())
        .map(|f| RegexBuilder::new(f).case_insensitive(true).build())
        .transpose()
        .map_err(RfDocsError::from)
}

fn summarize(library: &LibraryDoc, pattern: Option<&Regex>) -> LibraryKeywords {
    LibraryKeywords {
        library: library.name.clone(),
        keywords: library
            .keywords
            .values()
            .filter(|k| pattern.map_or(true, |p| p.is_match(&k.name)))
            .map(KeywordSummary::from)
            .collect(),
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase().replace(['_', '-'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn keyword(library: &str, name: &str, doc: &str) -> Keyword {
        Keyword {
            name: name.to_string(),
            library: library.to_string(),
            args: String::new(),
            doc: doc.to_string(),
            source: None,
            lineno: None,
        }
    }

    fn index() -> KeywordIndex {
        let builtin = LibraryDoc {
            name: "BuiltIn".to_string(),
            keywords: [
                keyword("BuiltIn", "Should Be Equal", "Fails if unequal."),
                keyword("BuiltIn", "Log", &"x".repeat(300)),
            ]
            .into_iter()
            .map(|k| (k.name.clone(), k))
            .collect(),
        };
        let string = LibraryDoc {
            name: "String".to_string(),
            keywords: [keyword("String", "Split String", "Splits.")]
                .into_iter()
                .map(|k| (k.name.clone(), k))
                .collect(),
        };
        KeywordIndex::from_libraries(vec![builtin, string])
    }

    #[test]
    fn test_library_sorted_and_truncated() {
        let listing = index().library("BuiltIn", None).unwrap();
        let names: Vec<_> = listing.keywords.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["Log", "Should Be Equal"]);
        assert_eq!(listing.keywords[0].description.len(), DESCRIPTION_LIMIT);
    }

    #[test]
    fn test_keyword_count_spans_libraries() {
        let index = index();
        assert_eq!(index.keyword_count(), 3);
        assert_eq!(index.library_names(), vec!["BuiltIn", "String"]);
    }

    #[test]
    fn test_unknown_library() {
        let err = index().library("Dialogs", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Library 'Dialogs' not found (available libraries: BuiltIn, String)"
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_and_drops_empty_libraries() {
        let all = index().all(Some("^split")).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].library, "String");
    }

    #[test]
    fn test_invalid_filter() {
        assert!(matches!(index().all(Some("(")), Err(RfDocsError::InvalidPattern(_))));
    }

    #[test]
    fn test_find_normalizes_names() {
        let index = index();
        let found = index.find("should_be-EQUAL", None).unwrap().unwrap();
        assert_eq!(found.name, "Should Be Equal");
        assert!(index.find("Split String", Some("BuiltIn")).unwrap().is_none());
    }

    #[test]
    fn test_check() {
        let index = index();
        let hit = index.check("log");
        assert!(hit.available);
        assert_eq!(hit.library.as_deref(), Some("BuiltIn"));
        assert_eq!(hit.keyword_actual_name.as_deref(), Some("Log"));

        let miss = index.check("Click Element");
        assert!(!miss.available);
        assert!(miss.library.is_none());
    }

    #[test]
    fn test_load_prefers_html_and_skips_broken() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("BuiltIn.html"),
            r#"<script>libdoc = {"keywords":[{"name":"Log","args":[],"shortdoc":"From html"}]};</script>"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("BuiltIn.json"),
            r#"{"keywords":[{"name":"Log","args":[],"shortdoc":"From json"}]}"#,
        )
        .unwrap();
        fs::write(temp.path().join("String.html"), "<html>no model</html>").unwrap();

        let index = KeywordIndex::load(temp.path(), &["BuiltIn", "String", "XML"]).unwrap();
        assert_eq!(index.library_names(), vec!["BuiltIn"]);
        assert_eq!(index.find("Log", None).unwrap().unwrap().doc, "From html");
    }

    #[test]
    fn test_load_empty_directory() {
        let temp = tempdir().unwrap();
        assert!(matches!(
            KeywordIndex::load(temp.path(), &["BuiltIn"]),
            Err(RfDocsError::DocsNotFound(_))
        ));
    }
}
