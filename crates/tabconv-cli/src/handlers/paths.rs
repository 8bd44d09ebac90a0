//! Paths command handler.

use anyhow::Result;
use tabconv_core::ResolvedPaths;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print every path tabconv reads or writes.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let settings = ctx.backend.get_settings().await.map_err(CliError::from)?;
    let paths = ResolvedPaths::resolve(settings.download_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    println!("{paths}");
    Ok(())
}
