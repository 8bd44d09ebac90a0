//! Media downloader port.

use std::path::Path;

use async_trait::async_trait;

use crate::download::{DownloadError, ProgressCallback};

/// Transfers the bytes of a direct media URL to a local file.
#[async_trait]
pub trait MediaDownloader: Send + Sync {
    /// Download `url` into `destination`, reporting through `progress`.
    ///
    /// Returns the number of bytes written. On failure no file is left at
    /// `destination`.
    async fn download(
        &self,
        url: &str,
        destination: &Path,
        progress: ProgressCallback<'_>,
    ) -> Result<u64, DownloadError>;
}
