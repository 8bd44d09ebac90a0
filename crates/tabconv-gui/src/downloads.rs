//! Download operations for the GUI backend.

use std::path::PathBuf;

use tabconv_core::events::DOWNLOADING_LABEL;
use tabconv_core::paths::resolve_download_dir;
use tabconv_core::{
    DownloadError, DownloadPlan, DownloadProgress, JobResult, Notification, StreamCriteria,
    selected_index, validate_url,
};
use tabconv_download::default_destination;
use tracing::{info, warn};

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::jobs::{BusySlot, JobHandle, spawn_job};
use crate::types::StreamListing;

/// Download operations handler.
pub struct DownloadOps<'a> {
    deps: &'a GuiDeps,
    slot: &'a BusySlot,
}

impl<'a> DownloadOps<'a> {
    pub(crate) const fn new(deps: &'a GuiDeps, slot: &'a BusySlot) -> Self {
        Self { deps, slot }
    }

    /// Resolve `url` and pick a stream using the configured criteria.
    pub async fn plan(&self, url: &str) -> Result<DownloadPlan, GuiError> {
        let settings = self.deps.effective_settings().await?;
        self.plan_with(url, &settings.stream_criteria()).await
    }

    /// Like [`Self::plan`] with explicit criteria.
    pub async fn plan_with(
        &self,
        url: &str,
        criteria: &StreamCriteria,
    ) -> Result<DownloadPlan, GuiError> {
        Ok(self.deps.orchestrator.plan(url, criteria).await?)
    }

    /// All streams for `url`, marking the one `plan` would choose.
    pub async fn list_streams(&self, url: &str) -> Result<StreamListing, GuiError> {
        let settings = self.deps.effective_settings().await?;
        let video = self.deps.orchestrator.resolve(url).await?;
        let selected = selected_index(&video.streams, &settings.stream_criteria());
        Ok(StreamListing { video, selected })
    }

    /// Where `plan` is saved when the user does not pick a destination.
    pub async fn suggested_destination(&self, plan: &DownloadPlan) -> Result<PathBuf, GuiError> {
        let settings = self.deps.effective_settings().await?;
        let dir = resolve_download_dir(settings.download_dir.as_deref())?;
        Ok(default_destination(plan, &dir))
    }

    /// Start fetching `plan` in the background.
    ///
    /// `destination` defaults to the suggested file in the download
    /// directory. An existing file is only replaced when `overwrite` is set.
    pub async fn start(
        &self,
        plan: DownloadPlan,
        destination: Option<PathBuf>,
        overwrite: bool,
    ) -> Result<JobHandle, GuiError> {
        validate_url(&plan.stream.url)?;

        let destination = match destination {
            Some(path) => path,
            None => self.suggested_destination(&plan).await?,
        };
        if destination.exists() && !overwrite {
            return Err(DownloadError::destination_exists(destination.display().to_string()).into());
        }

        let orchestrator = self.deps.orchestrator.clone();
        spawn_job(self.slot, DOWNLOADING_LABEL, None, move |events| async move {
            let progress = |p: DownloadProgress| events.progress(p);
            match orchestrator.execute(&plan, &destination, &progress).await {
                Ok(path) => {
                    info!(path = %path.display(), title = %plan.title, "Download saved");
                    JobResult::Downloaded { path }
                }
                Err(err) => {
                    warn!(error = %err, "Download failed");
                    events.notify(Notification::from(&err));
                    JobResult::Failed {
                        message: err.user_message(),
                    }
                }
            }
        })
    }
}
