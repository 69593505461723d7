//! rf-docs-config - write MCP client configuration for one target
//!
//! Usage: rf-docs-config <selector>

use anyhow::Context;
use clap::Parser;
use rfdocs::cli::{init_logging, report};
use rfdocs::project::Project;
use rfdocs::{emit, resolve, Settings};
use std::path::PathBuf;
use std::process::ExitCode;

/// Write the Robot Framework docs MCP server configuration for a client
#[derive(Parser)]
#[command(name = "rf-docs-config")]
#[command(version)]
#[command(about = "Write MCP client configuration for the Robot Framework docs server", long_about = None)]
struct Cli {
    /// Target: claude, cursor, vscode or cline
    selector: String,

    /// Project root (defaults to the nearest directory with a compose file)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let profile = resolve(&cli.selector)?;
    let settings = Settings::from_env().project_root(cli.project_root);

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let project = Project::locate(settings.project_root.as_deref(), &cwd)?;

    Ok(emit(&profile, &project.root)?)
}
