//! Hand a file to the desktop's default application.

use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Nothing to open at {0}")]
    NotFound(String),

    #[error("Failed to launch {launcher}: {source}")]
    Launch {
        launcher: &'static str,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> (&'static str, Command) {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    ("open", cmd)
}

#[cfg(windows)]
fn opener(path: &Path) -> (&'static str, Command) {
    // `start` treats its first quoted argument as a window title.
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    ("cmd", cmd)
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener(path: &Path) -> (&'static str, Command) {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    ("xdg-open", cmd)
}

/// Open `path` (typically a conversion log) without waiting for the viewer.
pub fn open_in_default_app(path: &Path) -> Result<(), OpenError> {
    if !path.exists() {
        return Err(OpenError::NotFound(path.display().to_string()));
    }

    let (launcher, mut cmd) = opener(path);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd.spawn()
        .map_err(|source| OpenError::Launch { launcher, source })?;

    debug!(path = %path.display(), launcher, "Opened in default application");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_launched() {
        let err = open_in_default_app(Path::new("/no/such/file.log")).unwrap_err();
        assert!(matches!(err, OpenError::NotFound(_)));
    }
}
