//! Download command handler.

use std::path::PathBuf;

use anyhow::Result;
use tabconv_core::VideoFormat;
use tabconv_download::default_destination;
use tabconv_gui::JobResult;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::convert;
use crate::presentation::run_job;

/// Arguments of `tabconv download`.
#[derive(Debug, Clone)]
pub struct DownloadArgs {
    pub url: String,
    pub output: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub format: Option<VideoFormat>,
    pub max_resolution: Option<u32>,
    pub force: bool,
    pub convert: bool,
}

/// Plan, print the chosen stream, download, optionally convert.
pub async fn execute(ctx: &CliContext, args: DownloadArgs) -> Result<()> {
    let settings = ctx.backend.get_settings().await.map_err(CliError::from)?;
    let mut criteria = settings.stream_criteria();
    if let Some(format) = args.format {
        criteria.format = format;
    }
    if let Some(max_resolution) = args.max_resolution {
        criteria.max_resolution = max_resolution;
    }

    let plan = ctx
        .backend
        .plan_download_with(&args.url, &criteria)
        .await
        .map_err(CliError::from)?;
    println!(
        "{} [{} {}p]",
        plan.title, plan.stream.format, plan.stream.resolution
    );

    let destination = args
        .output
        .or_else(|| args.dir.map(|dir| default_destination(&plan, &dir)));
    let handle = ctx
        .backend
        .start_download(plan, destination, args.force)
        .await
        .map_err(CliError::from)?;
    let finished = run_job(handle).await;

    let JobResult::Downloaded { path } = finished.result else {
        return Err(CliError::reported(finished.error_category).into());
    };
    println!("✓ Saved {}", path.display());

    if args.convert {
        convert::execute(ctx, &path, false).await?;
    }
    Ok(())
}
