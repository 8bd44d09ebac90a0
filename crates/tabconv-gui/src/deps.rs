//! Dependency injection for `GuiBackend`.
//!
//! All dependencies are trait objects so a window, a web handler or a test
//! can supply its own adapters.

use std::sync::Arc;

use tabconv_core::{
    MediaDownloader, Settings, SettingsService, StreamResolver, TranscodeRunner,
};
use tabconv_download::DownloadOrchestrator;

use crate::error::GuiError;

/// Dependencies required to construct a `GuiBackend`.
///
/// # Example
///
/// ```ignore
/// let deps = GuiDeps::new(settings, Arc::new(YtDlpResolver::default()),
///     Arc::new(HttpDownloader::new()), Arc::new(FfmpegRunner::new()));
/// let backend = GuiBackend::new(deps);
/// ```
#[derive(Clone)]
pub struct GuiDeps {
    pub(crate) settings: SettingsService,
    pub(crate) orchestrator: DownloadOrchestrator,
    pub(crate) runner: Arc<dyn TranscodeRunner>,
}

impl GuiDeps {
    pub fn new(
        settings: SettingsService,
        resolver: Arc<dyn StreamResolver>,
        downloader: Arc<dyn MediaDownloader>,
        runner: Arc<dyn TranscodeRunner>,
    ) -> Self {
        Self {
            settings,
            orchestrator: DownloadOrchestrator::new(resolver, downloader),
            runner,
        }
    }

    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }

    /// Stored settings with environment path overrides applied.
    ///
    /// Read fresh for every job so edits apply without a restart.
    pub(crate) async fn effective_settings(&self) -> Result<Settings, GuiError> {
        let mut settings = self.settings.get().await?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }
}
