//! Library documentation generation
//!
//! Runs Robot Framework's libdoc inside the docs server container once per
//! library and output format. A failed run is recorded and the loop moves on;
//! only a runner that cannot start processes at all stops the loop early.

use crate::libdoc::STANDARD_LIBRARIES;
use crate::process::{Invocation, ProcessRunner};
use crate::settings::Settings;
use tracing::{info, warn};

/// libdoc output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Html,
    Xml,
    Json,
}

impl DocFormat {
    /// Formats generated for every library
    pub const ALL: [DocFormat; 3] = [DocFormat::Html, DocFormat::Xml, DocFormat::Json];

    /// Value for libdoc's `--format` option
    pub fn libdoc_name(&self) -> &'static str {
        match self {
            DocFormat::Html => "HTML",
            DocFormat::Xml => "XML",
            DocFormat::Json => "JSON",
        }
    }

    /// Output file extension
    pub fn extension(&self) -> &'static str {
        match self {
            DocFormat::Html => "html",
            DocFormat::Xml => "xml",
            DocFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A document libdoc produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDoc {
    pub library: String,
    pub format: DocFormat,
    /// Output path inside the container
    pub output: String,
}

/// A libdoc run that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFailure {
    pub library: String,
    pub format: DocFormat,
    pub reason: String,
}

/// Outcome of a generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocGenReport {
    pub generated: Vec<GeneratedDoc>,
    pub failures: Vec<DocFailure>,
    /// Set when the loop stopped before covering every library
    pub aborted: Option<String>,
}

impl DocGenReport {
    /// Every requested document was produced
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.aborted.is_none()
    }

    /// One-line outcome, e.g. `24 generated, 3 failed`
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} generated, {} failed",
            self.generated.len(),
            self.failures.len()
        );
        if let Some(ref reason) = self.aborted {
            line.push_str(&format!(", aborted: {}", reason));
        }
        line
    }
}

/// Generates library docs through a [`ProcessRunner`]
pub struct DocGenerator<'a> {
    runner: &'a dyn ProcessRunner,
    docker: String,
    container: String,
    docs_dir: String,
    libraries: Vec<String>,
}

impl<'a> DocGenerator<'a> {
    /// Generator for every standard library
    pub fn new(runner: &'a dyn ProcessRunner, settings: &Settings) -> Self {
        Self {
            runner,
            docker: settings.docker.clone(),
            container: settings.container.clone(),
            docs_dir: settings.container_docs_dir.trim_end_matches('/').to_string(),
            libraries: STANDARD_LIBRARIES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Restrict generation to `libraries`; an empty list keeps the default set
    pub fn libraries(mut self, libraries: Vec<String>) -> Self {
        if !libraries.is_empty() {
            self.libraries = libraries;
        }
        self
    }

    /// Output path of one document inside the container
    pub fn output_path(&self, library: &str, format: DocFormat) -> String {
        format!("{}/{}.{}", self.docs_dir, library, format.extension())
    }

    /// Command producing one document
    pub fn invocation(&self, library: &str, format: DocFormat) -> Invocation {
        Invocation::new(&self.docker).args([
            "exec",
            self.container.as_str(),
            "python",
            "-m",
            "robot.libdoc",
            "--format",
            format.libdoc_name(),
            library,
            self.output_path(library, format).as_str(),
        ])
    }

    /// Generate every library in every format
    pub fn run(&self) -> DocGenReport {
        let mut report = DocGenReport::default();

        for library in &self.libraries {
            info!("Generating documentation for {}", library);
            for format in DocFormat::ALL {
                let invocation = self.invocation(library, format);
                match self.runner.run(&invocation) {
                    Ok(status) if status.success() => report.generated.push(GeneratedDoc {
                        library: library.clone(),
                        format,
                        output: self.output_path(library, format),
                    }),
                    Ok(status) => {
                        let reason = match status.code {
                            Some(code) => format!("libdoc exited with code {}", code),
                            None => "libdoc terminated by signal".to_string(),
                        };
                        warn!("{} ({}) failed: {}", library, format, reason);
                        report.failures.push(DocFailure {
                            library: library.clone(),
                            format,
                            reason,
                        });
                    }
                    Err(e) => {
                        warn!("Stopping documentation generation: {}", e);
                        report.aborted = Some(e.to_string());
                        return report;
                    }
                }
            }
        }

        info!("Documentation: {}", report.summary());
        report
    }
}
