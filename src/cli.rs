//! Helpers shared by the command line binaries

use crate::error::RfDocsError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// `--debug` forces debug output; otherwise `RUST_LOG` applies, falling back
/// to `info`.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<RfDocsError>()
        .map(RfDocsError::exit_code)
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}

/// Print `err` with its context chain and convert it to an exit code
pub fn report(err: anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);
    ExitCode::from(exit_code(&err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_propagates_process_failure() {
        let err = anyhow::Error::new(RfDocsError::ProcessFailed {
            command: "docker compose build".to_string(),
            code: Some(17),
        });
        assert_eq!(exit_code(&err), 17);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);

        let err = anyhow::Error::new(RfDocsError::InvalidConfig("x".to_string()));
        assert_eq!(exit_code(&err), 1);
    }
}
