//! Robot Framework libdoc output
//!
//! Reads the library documentation produced by the doc generation step and
//! answers keyword queries and User Guide searches without network access.

pub mod guide;
pub mod index;
pub mod parser;

pub use guide::{SearchHit, SearchResults, Section, UserGuide, DEFAULT_MAX_RESULTS, USER_GUIDE_FILE};
pub use index::{Availability, KeywordIndex, KeywordSummary, LibraryKeywords};
pub use parser::{extract_libdoc_json, parse_library, Keyword, LibraryDoc};

use serde_json::{json, Map, Value};

/// Robot Framework release the docs server targets
pub const RF_VERSION: &str = "7.4.1";

/// Standard libraries documented by the docs server
pub const STANDARD_LIBRARIES: [&str; 9] = [
    "BuiltIn",
    "Collections",
    "DateTime",
    "OperatingSystem",
    "Process",
    "Screenshot",
    "String",
    "Telnet",
    "XML",
];

/// Answer for a topic missing from [`documentation_urls`]
pub const TOPIC_NOT_FOUND: &str = "Topic not found";

/// Published User Guide
pub fn user_guide_url() -> String {
    format!(
        "https://robotframework.org/robotframework/{}/RobotFrameworkUserGuide.html",
        RF_VERSION
    )
}

/// Index of the published library docs
pub fn libraries_url() -> String {
    format!("https://robotframework.org/robotframework/{}/libraries/", RF_VERSION)
}

/// Published HTML documentation of a library
pub fn library_url(library: &str) -> String {
    format!("{}{}.html", libraries_url(), library)
}

/// Release notes of the targeted release
pub fn release_notes_url() -> String {
    format!(
        "https://github.com/robotframework/robotframework/blob/master/doc/releasenotes/rf-{}.rst",
        RF_VERSION
    )
}

/// Documentation links by topic
///
/// Topics: `user_guide`, `builtin_library`, `release_notes`, `all_libraries`
/// and `standard_libraries`, the last one a map of library name to URL.
pub fn documentation_urls() -> Map<String, Value> {
    let standard: Map<String, Value> = STANDARD_LIBRARIES
        .iter()
        .map(|library| (library.to_string(), Value::from(library_url(library))))
        .collect();

    let mut urls = Map::new();
    urls.insert("user_guide".to_string(), Value::from(user_guide_url()));
    urls.insert("builtin_library".to_string(), Value::from(library_url("BuiltIn")));
    urls.insert("release_notes".to_string(), Value::from(release_notes_url()));
    urls.insert("all_libraries".to_string(), Value::from(libraries_url()));
    urls.insert("standard_libraries".to_string(), Value::Object(standard));
    urls
}

/// `{"version": ..., "urls": {...}}` for one topic, or every topic when `None`
///
/// An unknown topic maps to [`TOPIC_NOT_FOUND`].
pub fn documentation_url(topic: Option<&str>) -> Value {
    let urls = documentation_urls();
    let urls = match topic.filter(|t| !t.is_empty()) {
        None => urls,
        Some(topic) => {
            let url = urls
                .get(topic)
                .cloned()
                .unwrap_or_else(|| Value::from(TOPIC_NOT_FOUND));
            Map::from_iter([(topic.to_string(), url)])
        }
    };
    json!({ "version": RF_VERSION, "urls": urls })
}

/// Anchor of a keyword inside its library page
pub fn keyword_url(library: &str, keyword: &str) -> String {
    format!("{}#{}", library_url(library), keyword.replace(' ', "%20"))
}
