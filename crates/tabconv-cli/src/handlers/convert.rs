//! Convert command handler.

use std::path::Path;

use anyhow::Result;
use tabconv_core::domain::SUPPORTED_VIDEO_EXTENSIONS;
use tabconv_gui::JobResult;
use tabconv_runtime::open_in_default_app;
use tracing::warn;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::run_job;

/// Convert `file` and report the outcome.
///
/// On failure the log path is printed; with `open_log` it is also opened.
/// Success never opens anything.
pub async fn execute(ctx: &CliContext, file: &Path, open_log: bool) -> Result<()> {
    if !ctx.backend.is_supported_video(file) {
        eprintln!(
            "note: {} is not one of the usual video types ({})",
            file.display(),
            SUPPORTED_VIDEO_EXTENSIONS.join(", ")
        );
    }

    let handle = ctx
        .backend
        .start_convert(file)
        .await
        .map_err(CliError::from)?;
    let finished = run_job(handle).await;

    match finished.result {
        JobResult::Transcoded { outcome } if outcome.success() => {
            println!("  Output: {}", outcome.output.display());
            Ok(())
        }
        JobResult::Transcoded { outcome } => {
            if open_log {
                if let Err(e) = open_in_default_app(&outcome.log_path) {
                    warn!(error = %e, "Could not open log");
                    eprintln!("Could not open {}: {e}", outcome.log_path.display());
                }
            }
            Err(CliError::reported(finished.error_category).into())
        }
        JobResult::Failed { .. } | JobResult::Downloaded { .. } => {
            Err(CliError::reported(finished.error_category).into())
        }
    }
}
