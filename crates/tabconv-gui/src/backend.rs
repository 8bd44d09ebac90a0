//! `GuiBackend` - the facade a window binds to.

use std::path::{Path, PathBuf};

use tabconv_core::{DownloadPlan, Settings, SettingsUpdate, StreamCriteria};

use crate::convert::ConvertOps;
use crate::deps::GuiDeps;
use crate::downloads::DownloadOps;
use crate::error::GuiError;
use crate::jobs::{BusySlot, JobHandle};
use crate::settings::SettingsOps;
use crate::types::{DialogFilter, StreamListing};

/// Unified GUI backend facade.
///
/// Owns the busy slot: at most one download or conversion runs at a time,
/// and the UI learns about it only through the returned [`JobHandle`].
///
/// # Construction
///
/// ```ignore
/// let backend = GuiBackend::new(GuiDeps::new(settings, resolver, downloader, runner));
/// let plan = backend.plan_download(url).await?;
/// let mut job = backend.start_download(plan, None, false).await?;
/// while let Some(event) = job.events.recv().await { /* update widgets */ }
/// ```
pub struct GuiBackend {
    deps: GuiDeps,
    slot: BusySlot,
}

impl GuiBackend {
    pub fn new(deps: GuiDeps) -> Self {
        Self {
            deps,
            slot: BusySlot::default(),
        }
    }

    fn download_ops(&self) -> DownloadOps<'_> {
        DownloadOps::new(&self.deps, &self.slot)
    }

    fn convert_ops(&self) -> ConvertOps<'_> {
        ConvertOps::new(&self.deps, &self.slot)
    }

    fn settings_ops(&self) -> SettingsOps<'_> {
        SettingsOps::new(&self.deps)
    }

    /// Whether a job currently holds the busy slot.
    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    // =========================================================================
    // Download operations
    // =========================================================================

    pub async fn plan_download(&self, url: &str) -> Result<DownloadPlan, GuiError> {
        self.download_ops().plan(url).await
    }

    /// Plan with criteria other than the configured ones.
    pub async fn plan_download_with(
        &self,
        url: &str,
        criteria: &StreamCriteria,
    ) -> Result<DownloadPlan, GuiError> {
        self.download_ops().plan_with(url, criteria).await
    }

    pub async fn list_streams(&self, url: &str) -> Result<StreamListing, GuiError> {
        self.download_ops().list_streams(url).await
    }

    pub async fn suggested_destination(&self, plan: &DownloadPlan) -> Result<PathBuf, GuiError> {
        self.download_ops().suggested_destination(plan).await
    }

    pub async fn start_download(
        &self,
        plan: DownloadPlan,
        destination: Option<PathBuf>,
        overwrite: bool,
    ) -> Result<JobHandle, GuiError> {
        self.download_ops()
            .start(plan, destination, overwrite)
            .await
    }

    // =========================================================================
    // Conversion operations
    // =========================================================================

    pub async fn start_convert(&self, input: impl Into<PathBuf>) -> Result<JobHandle, GuiError> {
        self.convert_ops().start(input.into()).await
    }

    pub fn open_dialog_filters(&self) -> Vec<DialogFilter> {
        ConvertOps::dialog_filters()
    }

    pub fn is_supported_video(&self, path: &Path) -> bool {
        ConvertOps::is_supported(path)
    }

    // =========================================================================
    // Settings operations
    // =========================================================================

    pub async fn get_settings(&self) -> Result<Settings, GuiError> {
        self.settings_ops().get().await
    }

    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<Settings, GuiError> {
        self.settings_ops().update(update).await
    }

    pub async fn reset_settings(&self) -> Result<Settings, GuiError> {
        self.settings_ops().reset().await
    }
}
