//! yt-dlp backed stream resolver.
//!
//! Runs `yt-dlp --dump-single-json` for a page URL and turns its format
//! list into stream descriptors. yt-dlp does all talking to the host.

mod parse;

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tabconv_core::{DownloadError, ResolvedVideo, StreamResolver};
use tokio::process::Command;
use tracing::{debug, info};
use url::Url;

pub use parse::parse_info_json;

/// Executable name looked up on `PATH` when no explicit path is configured.
pub const DEFAULT_RESOLVER_PROGRAM: &str = "yt-dlp";

/// Flags that make yt-dlp print one JSON document and download nothing.
const DUMP_ARGS: &[&str] = &[
    "--dump-single-json",
    "--no-playlist",
    "--no-warnings",
    "--skip-download",
];

/// Resolver that shells out to yt-dlp.
#[derive(Debug, Clone, Default)]
pub struct YtDlpResolver {
    program: Option<PathBuf>,
}

impl YtDlpResolver {
    /// Use `program` if given, else find `yt-dlp` on `PATH` at resolve time.
    pub const fn new(program: Option<PathBuf>) -> Self {
        Self { program }
    }

    fn locate(&self) -> Result<PathBuf, DownloadError> {
        match &self.program {
            Some(path) if path.exists() => Ok(path.clone()),
            Some(path) => Err(DownloadError::resolver_missing(format!(
                "{} does not exist",
                path.display()
            ))),
            None => which::which(DEFAULT_RESOLVER_PROGRAM).map_err(|e| {
                DownloadError::resolver_missing(format!(
                    "{DEFAULT_RESOLVER_PROGRAM} not found on PATH: {e}"
                ))
            }),
        }
    }
}

#[async_trait]
impl StreamResolver for YtDlpResolver {
    async fn resolve(&self, url: &Url) -> Result<ResolvedVideo, DownloadError> {
        let program = self.locate()?;
        debug!(program = %program.display(), %url, "Running stream resolver");

        let mut cmd = Command::new(&program);
        cmd.args(DUMP_ARGS)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        hide_console_window(&mut cmd);

        let output = cmd.output().await.map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                DownloadError::resolver_missing(format!("{}: {e}", program.display()))
            }
            _ => DownloadError::from_io_error(&e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("resolver exited with {}", output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(DownloadError::resolution_failed(message));
        }

        let video = parse_info_json(&String::from_utf8_lossy(&output.stdout))?;
        info!(
            title = %video.title,
            streams = video.streams.len(),
            "Resolved video page"
        );
        Ok(video)
    }
}

#[cfg(windows)]
fn hide_console_window(cmd: &mut Command) {
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
const fn hide_console_window(_cmd: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_configured_program() {
        let resolver = YtDlpResolver::new(Some(PathBuf::from("/no/such/yt-dlp")));
        let url = Url::parse("https://example.com/watch?v=1").unwrap();

        let err = resolver.resolve(&url).await.unwrap_err();
        assert!(matches!(err, DownloadError::ResolverMissing { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_fake_resolver_script() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("yt-dlp");
        std::fs::write(
            &script,
            "#!/bin/sh\ncat <<'JSON'\n{\"title\":\"Clip\",\"formats\":[{\"ext\":\"webm\",\"height\":240,\
             \"url\":\"https://cdn/a\",\"vcodec\":\"vp8\",\"acodec\":\"vorbis\"}]}\nJSON\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let resolver = YtDlpResolver::new(Some(script));
        let url = Url::parse("https://example.com/watch?v=1").unwrap();
        let video = resolver.resolve(&url).await.unwrap();

        assert_eq!(video.title, "Clip");
        assert_eq!(video.streams.len(), 1);
        assert_eq!(video.streams[0].resolution, 240);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_reports_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("yt-dlp");
        std::fs::write(
            &script,
            "#!/bin/sh\necho 'ERROR: Video unavailable' >&2\nexit 1\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let resolver = YtDlpResolver::new(Some(script));
        let url = Url::parse("https://example.com/watch?v=gone").unwrap();
        let err = resolver.resolve(&url).await.unwrap_err();

        assert_eq!(
            err,
            DownloadError::resolution_failed("ERROR: Video unavailable")
        );
    }
}
