//! Streaming HTTP downloader.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tabconv_core::{DownloadError, DownloadProgress, MediaDownloader, ProgressCallback};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::progress::ProgressThrottle;

const USER_AGENT: &str = concat!("tabconv/", env!("CARGO_PKG_VERSION"));

/// Downloads media bytes with reqwest, writing through a `.part` file.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn transfer(
        &self,
        url: &str,
        part_path: &Path,
        progress: ProgressCallback<'_>,
    ) -> Result<u64, DownloadError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| DownloadError::network(format!("Failed to start download: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::network_with_status(
                format!("Download failed: HTTP {status}"),
                status.as_u16(),
            ));
        }

        let total = response.content_length();
        debug!(url, ?total, "Download response received");

        let mut file = File::create(part_path).await?;
        let mut stream = response.bytes_stream();
        let mut throttle = ProgressThrottle::default();
        let mut downloaded: u64 = 0;
        let mut reported_complete = false;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk
                .map_err(|e| DownloadError::network(format!("Error reading download stream: {e}")))?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            let update = DownloadProgress::new(downloaded, total);
            if throttle.admit(&update) {
                reported_complete = update.is_complete();
                progress(update);
            }
        }

        file.flush().await?;
        drop(file);

        if let Some(expected) = total {
            if downloaded < expected {
                return Err(DownloadError::network(format!(
                    "Connection closed after {downloaded} of {expected} bytes"
                )));
            }
        }

        // Unknown lengths and empty bodies still end on a full bar.
        if !reported_complete {
            progress(DownloadProgress::new(downloaded, Some(total.unwrap_or(downloaded))));
        }
        Ok(downloaded)
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

/// `<destination>.part`, the in-progress sibling of a download.
pub fn part_path_for(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(".part");
    PathBuf::from(name)
}

#[async_trait]
impl MediaDownloader for HttpDownloader {
    async fn download(
        &self,
        url: &str,
        destination: &Path,
        progress: ProgressCallback<'_>,
    ) -> Result<u64, DownloadError> {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let part_path = part_path_for(destination);
        match self.transfer(url, &part_path, progress).await {
            Ok(bytes) => {
                fs::rename(&part_path, destination).await?;
                info!(path = %destination.display(), bytes, "Download complete");
                Ok(bytes)
            }
            Err(err) => {
                if let Err(e) = fs::remove_file(&part_path).await {
                    if e.kind() != std::io::ErrorKind::NotFound {
                        warn!(path = %part_path.display(), error = %e, "Failed to remove partial download");
                    }
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_path() {
        assert_eq!(
            part_path_for(Path::new("/tmp/clip.webm")),
            PathBuf::from("/tmp/clip.webm.part")
        );
    }
}
