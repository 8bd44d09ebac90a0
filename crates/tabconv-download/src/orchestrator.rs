//! Download orchestration.
//!
//! Validates the URL, asks the resolver for streams, applies the selection
//! rule and hands the chosen stream to the downloader.
//!
//! # Example
//!
//! ```ignore
//! let orchestrator = DownloadOrchestrator::new(resolver, downloader);
//! let plan = orchestrator.plan(raw_url, &settings.stream_criteria()).await?;
//! let saved = orchestrator.execute(&plan, &destination, &|p| println!("{}%", p.percent())).await?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tabconv_core::{
    DownloadError, DownloadPlan, MediaDownloader, ProgressCallback, ResolvedVideo,
    StreamCriteria, StreamResolver, select_with, validate_url,
};
use tracing::info;

/// Wires a resolver and a downloader into the plan/execute flow.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    resolver: Arc<dyn StreamResolver>,
    downloader: Arc<dyn MediaDownloader>,
}

impl DownloadOrchestrator {
    pub fn new(resolver: Arc<dyn StreamResolver>, downloader: Arc<dyn MediaDownloader>) -> Self {
        Self {
            resolver,
            downloader,
        }
    }

    /// Validate `raw_url` and list every stream the resolver found.
    ///
    /// The resolver is never called for an invalid URL.
    pub async fn resolve(&self, raw_url: &str) -> Result<ResolvedVideo, DownloadError> {
        let url = validate_url(raw_url)?;
        self.resolver.resolve(&url).await
    }

    /// Decide what would be downloaded for `raw_url`.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` before any I/O
    /// - resolver errors unchanged
    /// - `NoSuitableStream` when nothing matches `criteria`
    pub async fn plan(
        &self,
        raw_url: &str,
        criteria: &StreamCriteria,
    ) -> Result<DownloadPlan, DownloadError> {
        let video = self.resolve(raw_url).await?;
        let stream = select_with(&video.streams, criteria).ok_or_else(|| {
            DownloadError::no_suitable_stream(criteria.format, criteria.max_resolution)
        })?;

        info!(
            title = %video.title,
            format = %stream.format,
            resolution = stream.resolution,
            "Selected stream"
        );
        Ok(DownloadPlan::new(video.title.clone(), stream.clone()))
    }

    /// Fetch the planned stream into `destination`.
    ///
    /// `progress` is only called during this call.
    pub async fn execute(
        &self,
        plan: &DownloadPlan,
        destination: &Path,
        progress: ProgressCallback<'_>,
    ) -> Result<PathBuf, DownloadError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        self.downloader
            .download(&plan.stream.url, destination, progress)
            .await?;
        Ok(destination.to_path_buf())
    }
}

/// Default save location for `plan` inside `directory`.
pub fn default_destination(plan: &DownloadPlan, directory: &Path) -> PathBuf {
    directory.join(&plan.suggestion.file_name)
}
