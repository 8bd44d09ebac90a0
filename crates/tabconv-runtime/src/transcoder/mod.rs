//! ffmpeg implementation of the `TranscodeRunner` port.
//!
//! One run is: check preconditions, spawn, drain stdout and stderr
//! concurrently until exit, then write the log next to the input.
//! A nonzero exit is reported through the outcome, never as an error.

mod command;
mod log;
mod stream;

use std::path::Path;

use async_trait::async_trait;
use tabconv_core::{TranscodeError, TranscodeOutcome, TranscodeRunner, TranscoderConfig};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub use command::build_command;
pub use log::{STDERR_HEADING, STDOUT_HEADING, render_log, write_log};
pub use stream::spawn_line_capture;

/// Runs ffmpeg as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegRunner;

impl FfmpegRunner {
    pub const fn new() -> Self {
        Self
    }
}

async fn collect(handle: Option<JoinHandle<Vec<String>>>, stream_type: &str) -> Vec<String> {
    let Some(handle) = handle else {
        return Vec::new();
    };
    match handle.await {
        Ok(lines) => lines,
        Err(e) => {
            warn!(%stream_type, error = %e, "Output capture task failed");
            Vec::new()
        }
    }
}

#[async_trait]
impl TranscodeRunner for FfmpegRunner {
    async fn run(
        &self,
        input: &Path,
        config: &TranscoderConfig,
    ) -> Result<TranscodeOutcome, TranscodeError> {
        let job = config.prepare(input)?;

        let mut child = build_command(&job).spawn().map_err(|e| {
            TranscodeError::spawn_failed(job.program.display().to_string(), e.to_string())
        })?;
        debug!(pid = ?child.id(), command = %job.command_line, "Transcoder started");

        let stdout = child
            .stdout
            .take()
            .map(|s| spawn_line_capture(s, "stdout"));
        let stderr = child
            .stderr
            .take()
            .map(|s| spawn_line_capture(s, "stderr"));

        let status = child
            .wait()
            .await
            .map_err(|e| TranscodeError::from_io_error(&e))?;
        let stdout = collect(stdout, "stdout").await;
        let stderr = collect(stderr, "stderr").await;

        let exit_code = status.code();
        let text = render_log(&job.command_line, exit_code, &stdout, &stderr);
        write_log(&job.log_path, &text).await?;

        let outcome = TranscodeOutcome {
            exit_code,
            output: job.output,
            log_path: job.log_path,
            command_line: job.command_line,
        };

        if outcome.success() {
            info!(output = %outcome.output.display(), "Conversion finished");
        } else {
            warn!(
                ?exit_code,
                log = %outcome.log_path.display(),
                "Transcoder exited unsuccessfully"
            );
        }
        Ok(outcome)
    }
}
