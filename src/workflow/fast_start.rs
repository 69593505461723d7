//! Fast start: write the client config, then rebuild and start the container

use super::docgen::{DocGenReport, DocGenerator};
use crate::emit::emit;
use crate::error::Result;
use crate::process::{check, Invocation, ProcessRunner};
use crate::profile::resolve;
use crate::project::Project;
use crate::settings::Settings;
use std::path::PathBuf;
use tracing::{info, warn};

/// A completed fast start step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    WriteConfig,
    ComposeDown,
    ComposeBuild,
    ComposeUp,
    GenerateDocs,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::WriteConfig => write!(f, "write config"),
            Step::ComposeDown => write!(f, "compose down"),
            Step::ComposeBuild => write!(f, "compose build"),
            Step::ComposeUp => write!(f, "compose up"),
            Step::GenerateDocs => write!(f, "generate docs"),
        }
    }
}

/// What a fast start did
#[derive(Debug, Clone)]
pub struct FastStartReport {
    /// Config file written
    pub config_path: PathBuf,
    /// Steps completed, in order
    pub steps: Vec<Step>,
    /// Documentation pass, when requested
    pub docs: Option<DocGenReport>,
}

/// Fast start sequence
pub struct FastStart<'a> {
    runner: &'a dyn ProcessRunner,
    settings: &'a Settings,
    project: &'a Project,
    build: bool,
    with_docs: bool,
}

impl<'a> FastStart<'a> {
    /// Create a fast start for `project`
    pub fn new(runner: &'a dyn ProcessRunner, settings: &'a Settings, project: &'a Project) -> Self {
        Self {
            runner,
            settings,
            project,
            build: true,
            with_docs: false,
        }
    }

    /// Rebuild the image before starting (default: true)
    pub fn build(mut self, build: bool) -> Self {
        self.build = build;
        self
    }

    /// Generate library docs once the container is up
    pub fn with_docs(mut self, with_docs: bool) -> Self {
        self.with_docs = with_docs;
        self
    }

    /// `docker compose [-f <file>] <args>` run from the project root
    pub fn compose_invocation(&self, args: &[&str]) -> Invocation {
        let mut invocation = Invocation::new(&self.settings.docker).arg("compose");
        if let Some(ref file) = self.project.compose_file {
            invocation = invocation.arg("-f").arg(file.display().to_string());
        }
        invocation.args(args.iter().copied()).current_dir(&self.project.root)
    }

    /// Run the sequence for `selector`
    pub fn run(&self, selector: &str) -> Result<FastStartReport> {
        let profile = resolve(selector)?;
        self.check_compose();

        let mut steps = Vec::new();

        info!("Writing {} configuration", profile.selector);
        let config_path = emit(&profile, &self.project.root)?;
        steps.push(Step::WriteConfig);

        let mut sequence = vec![(Step::ComposeDown, vec!["down"])];
        if self.build {
            sequence.push((Step::ComposeBuild, vec!["build"]));
        }
        sequence.push((Step::ComposeUp, vec!["up", "-d"]));

        for (step, args) in sequence {
            info!("Running {}", step);
            let invocation = self.compose_invocation(&args);
            let status = self.runner.run(&invocation)?;
            check(&invocation, status)?;
            steps.push(step);
        }

        let docs = if self.with_docs {
            let report = DocGenerator::new(self.runner, self.settings).run();
            if !report.is_success() {
                warn!(
                    "Documentation generation incomplete ({}); continuing",
                    report.summary()
                );
            }
            steps.push(Step::GenerateDocs);
            Some(report)
        } else {
            None
        };

        info!("Container {} is up", self.settings.container);
        Ok(FastStartReport {
            config_path,
            steps,
            docs,
        })
    }

    fn check_compose(&self) {
        match self.project.compose() {
            Ok(Some(compose)) if !compose.declares_container(&self.settings.container) => {
                warn!(
                    "No service in the compose file sets container_name: {}",
                    self.settings.container
                );
            }
            Ok(_) => {}
            Err(e) => warn!("Could not read compose file: {}", e),
        }
    }
}
