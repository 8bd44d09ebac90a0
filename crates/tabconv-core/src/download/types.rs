//! Download value types shared between the orchestrator and adapters.

use serde::{Deserialize, Serialize};

use crate::domain::{SaveSuggestion, StreamDescriptor};

/// Bytes transferred so far for one download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DownloadProgress {
    /// Bytes written to disk.
    pub downloaded: u64,
    /// Total size, when the server reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl DownloadProgress {
    pub const fn new(downloaded: u64, total: Option<u64>) -> Self {
        Self { downloaded, total }
    }

    /// Completion percentage clamped to 0..=100.
    ///
    /// Unknown totals report 0 so a progress bar never jumps. A zero-byte
    /// total is already complete.
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        match self.total {
            Some(0) => 100.0,
            Some(total) => (self.downloaded as f64 / total as f64 * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }

    /// Whether every expected byte has arrived.
    pub fn is_complete(&self) -> bool {
        self.total.is_some_and(|total| self.downloaded >= total)
    }
}

/// Progress sink scoped to a single `execute` call.
pub type ProgressCallback<'a> = &'a (dyn Fn(DownloadProgress) + Send + Sync);

/// Outcome of planning a download: what would be fetched and where it
/// would be saved by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadPlan {
    /// Title reported by the resolver.
    pub title: String,
    /// Stream chosen by the selector.
    pub stream: StreamDescriptor,
    /// Suggested save name and dialog filter.
    pub suggestion: SaveSuggestion,
}

impl DownloadPlan {
    pub fn new(title: impl Into<String>, stream: StreamDescriptor) -> Self {
        let title = title.into();
        let suggestion = SaveSuggestion::for_title(&title, stream.format);
        Self {
            title,
            stream,
            suggestion,
        }
    }
}
