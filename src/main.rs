//! rfdocs - Robot Framework docs MCP server setup
//!
//! This is the main CLI entry point for rfdocs.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rfdocs::cli::{init_logging, report};
use rfdocs::emit::{emit, render};
use rfdocs::libdoc::{
    documentation_url, KeywordIndex, LibraryKeywords, SearchResults, UserGuide,
    DEFAULT_MAX_RESULTS, STANDARD_LIBRARIES, TOPIC_NOT_FOUND,
};
use rfdocs::process::SystemRunner;
use rfdocs::profile::{profiles, resolve};
use rfdocs::project::Project;
use rfdocs::workflow::{DocGenerator, FastStart};
use rfdocs::Settings;
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

/// Robot Framework docs MCP server setup
#[derive(Parser)]
#[command(name = "rfdocs")]
#[command(version)]
#[command(about = "Set up the Robot Framework documentation MCP server", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Project root (defaults to the nearest directory with a compose file)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the MCP client configuration for a target
    Config {
        /// Target: claude, cursor, vscode or cline
        selector: String,
        /// Print the configuration instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported targets
    Profiles,

    /// Write the configuration, then rebuild and start the container
    Start {
        /// Target: claude, cursor, vscode or cline
        selector: String,
        /// Generate library documentation once the container is up
        #[arg(long)]
        with_docs: bool,
        /// Start without rebuilding the image
        #[arg(long)]
        skip_build: bool,
    },

    /// Generate library documentation inside the container
    Docs {
        /// Library to document (repeatable; defaults to all standard libraries)
        #[arg(short, long)]
        library: Vec<String>,
        /// Container name
        #[arg(long)]
        container: Option<String>,
    },

    /// List keywords from the generated documentation
    Keywords {
        /// Only this library
        #[arg(short, long)]
        library: Option<String>,
        /// Case-insensitive regex on keyword names
        #[arg(short, long)]
        filter: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show documentation for one keyword
    Keyword {
        /// Keyword name (case, `_` and `-` are ignored)
        name: String,
        /// Only search this library
        #[arg(short, long)]
        library: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a keyword exists in any standard library
    Check {
        /// Keyword name
        name: String,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the User Guide saved in the docs directory
    Search {
        /// Text to look for (case-insensitive)
        query: String,
        /// Maximum number of sections shown
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        max: usize,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show links to the published documentation
    Urls {
        /// user_guide, builtin_library, release_notes, all_libraries or standard_libraries
        topic: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(code) => code,
        Err(e) => report(e),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::from_env().project_root(cli.project_root);
    let runner = SystemRunner;

    match cli.command {
        Commands::Config { selector, dry_run } => {
            let profile = resolve(&selector)?;
            if dry_run {
                println!("{}", serde_json::to_string_pretty(&render(&profile)?)?);
            } else {
                let project = locate(&settings)?;
                let path = emit(&profile, &project.root)?;
                println!("{}", path.display());
            }
        }

        Commands::Profiles => {
            println!("{:<8} {:<28} {:<11} EXTRA", "TARGET", "PATH", "SCHEMA");
            for profile in profiles() {
                let extra = profile
                    .extra_settings
                    .as_ref()
                    .map(|e| e.key)
                    .unwrap_or("-");
                println!(
                    "{:<8} {:<28} {:<11} {}",
                    profile.selector,
                    profile.relative_path().display(),
                    profile.schema,
                    extra
                );
            }
        }

        Commands::Start {
            selector,
            with_docs,
            skip_build,
        } => {
            // Reject bad selectors before touching the filesystem
            resolve(&selector)?;
            let project = locate(&settings)?;
            let outcome = FastStart::new(&runner, &settings, &project)
                .build(!skip_build)
                .with_docs(with_docs)
                .run(&selector)?;

            println!("Configuration written to {}", outcome.config_path.display());
            if let Some(docs) = outcome.docs {
                println!("Documentation: {}", docs.summary());
            }
        }

        Commands::Docs { library, container } => {
            let settings = settings.container(container);
            let outcome = DocGenerator::new(&runner, &settings).libraries(library).run();

            for failure in &outcome.failures {
                eprintln!("{} ({}): {}", failure.library, failure.format, failure.reason);
            }
            println!("Documentation: {}", outcome.summary());
            if !outcome.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Keywords {
            library,
            filter,
            json,
        } => {
            let index = load_index(&settings)?;
            let listings = match library {
                Some(ref name) => vec![index.library(name, filter.as_deref())?],
                None => index.all(filter.as_deref())?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&listings)?);
            } else {
                print_listings(&listings);
                if library.is_none() && filter.is_none() {
                    println!(
                        "{} keywords in {} libraries",
                        index.keyword_count(),
                        index.library_names().len()
                    );
                }
            }
        }

        Commands::Keyword {
            name,
            library,
            json,
        } => {
            let index = load_index(&settings)?;
            let Some(keyword) = index.find(&name, library.as_deref())? else {
                eprintln!("Keyword '{}' not found", name);
                return Ok(ExitCode::FAILURE);
            };

            if json {
                println!("{}", serde_json::to_string_pretty(keyword)?);
            } else {
                println!("{} ({})", keyword.name, keyword.library);
                if !keyword.args.is_empty() {
                    println!("  Arguments: {}", keyword.args);
                }
                println!("  {}", keyword.doc);
                println!(
                    "  {}",
                    rfdocs::libdoc::keyword_url(&keyword.library, &keyword.name)
                );
            }
        }

        Commands::Check { name, json } => {
            let index = load_index(&settings)?;
            let availability = index.check(&name);

            if json {
                println!("{}", serde_json::to_string_pretty(&availability)?);
            } else {
                match (&availability.library, &availability.keyword_actual_name) {
                    (Some(library), Some(actual)) => {
                        println!("'{}' is available in {} as '{}'", name, library, actual)
                    }
                    _ => println!("'{}' was not found in any standard library", name),
                }
            }
            if !availability.available {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Search { query, max, json } => {
            let guide = UserGuide::load(&docs_dir(&settings)?)?;
            let results = guide.search(&query, max)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_search(&results);
            }
        }

        Commands::Urls { topic, json } => {
            let answer = documentation_url(topic.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                print_urls(&answer["urls"]);
            }
            if let Some(ref topic) = topic {
                if answer["urls"][topic.as_str()] == TOPIC_NOT_FOUND {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn locate(settings: &Settings) -> anyhow::Result<Project> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Ok(Project::locate(settings.project_root.as_deref(), &cwd)?)
}

fn docs_dir(settings: &Settings) -> anyhow::Result<PathBuf> {
    Ok(match settings.host_docs_dir {
        Some(ref dir) => dir.clone(),
        None => settings.docs_dir(&locate(settings)?.root),
    })
}

fn load_index(settings: &Settings) -> anyhow::Result<KeywordIndex> {
    Ok(KeywordIndex::load(&docs_dir(settings)?, &STANDARD_LIBRARIES)?)
}

fn print_listings(listings: &[LibraryKeywords]) {
    for listing in listings {
        println!("{} ({} keywords)", listing.library, listing.keywords.len());
        for keyword in &listing.keywords {
            println!("  {:<40} {}", keyword.name, keyword.args);
        }
    }
}

fn print_search(results: &SearchResults) {
    println!(
        "{} sections match '{}' (showing {})",
        results.total_matches,
        results.query,
        results.results.len()
    );
    for hit in &results.results {
        println!("[{}] {}", hit.relevance, hit.title);
        println!("  {}", hit.url);
        println!("  {}", hit.content_preview);
    }
}

fn print_urls(urls: &Value) {
    let Some(urls) = urls.as_object() else {
        return;
    };
    for (topic, url) in urls {
        match url {
            Value::Object(libraries) => {
                println!("{}", topic);
                for (library, url) in libraries {
                    println!("  {:<18} {}", library, url.as_str().unwrap_or_default());
                }
            }
            other => println!("{:<20} {}", topic, other.as_str().unwrap_or_default()),
        }
    }
}
