//! Config emitter
//!
//! Writes the MCP client configuration for a profile under the project root.
//! The file is written to a temporary sibling and renamed into place, so an
//! interrupted write never leaves a truncated config behind.

pub mod render;

pub use render::{render, render_text};

use crate::error::{RfDocsError, Result};
use crate::profile::Profile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Write the configuration file for `profile` and return its absolute path
pub fn emit(profile: &Profile, project_root: &Path) -> Result<PathBuf> {
    let dir = profile.target_dir(project_root);
    fs::create_dir_all(&dir).map_err(|e| RfDocsError::io(&dir, e))?;

    let path = dir.join(profile.file_name());
    let text = render_text(profile)?;
    write_atomic(&dir, &path, text.as_bytes())?;

    let path = absolute(path)?;
    info!("Wrote {} configuration to {}", profile.selector, path.display());
    Ok(path)
}

fn write_atomic(dir: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".rfdocs-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| RfDocsError::io(dir, e))?;
    debug!("Staging {} via {}", path.display(), tmp.path().display());

    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| RfDocsError::io(tmp.path(), e))?;

    // Temp files are created 0600; config files are meant to be shared
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| RfDocsError::io(tmp.path(), e))?;
    }

    tmp.persist(path).map_err(|e| RfDocsError::io(path, e.error))?;
    Ok(())
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| RfDocsError::io(".", e))?;
    Ok(cwd.join(path))
}
