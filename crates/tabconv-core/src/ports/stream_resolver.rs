//! Stream resolver port.
//!
//! Turns a video page URL into the list of downloadable streams. The
//! shipped adapter shells out to yt-dlp; tests use mocks.

use async_trait::async_trait;
use url::Url;

use crate::domain::ResolvedVideo;
use crate::download::DownloadError;

/// Resolves a validated page URL to its title and candidate streams.
///
/// # Errors
///
/// - `ResolverMissing` when the backing tool cannot be run
/// - `ResolutionFailed` when it runs but cannot describe the page
#[async_trait]
pub trait StreamResolver: Send + Sync {
    async fn resolve(&self, url: &Url) -> Result<ResolvedVideo, DownloadError>;
}
