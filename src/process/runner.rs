//! Process runner trait and the system implementation

use crate::error::{RfDocsError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// A single command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// Working directory (inherited when unset)
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation of `program` with no arguments
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir`
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a finished process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ExitStatus {
    /// Successful exit
    pub const SUCCESS: ExitStatus = ExitStatus { code: Some(0) };

    /// Exit with the given code
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the process exited with code 0
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Executes external commands
pub trait ProcessRunner {
    /// Run `invocation` to completion and report how it exited
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus>;
}

/// Turn a non-zero exit into [`RfDocsError::ProcessFailed`]
pub fn check(invocation: &Invocation, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(RfDocsError::ProcessFailed {
            command: invocation.to_string(),
            code: status.code,
        })
    }
}

/// Runs commands on the host, streaming their output to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        debug!("Running {}", invocation);

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(ref cwd) = invocation.cwd {
            command.current_dir(cwd);
        }

        let status = command.status().map_err(|e| RfDocsError::Spawn {
            command: invocation.to_string(),
            source: e,
        })?;

        debug!("{} exited with {:?}", invocation.program, status.code());
        Ok(status.into())
    }
}
