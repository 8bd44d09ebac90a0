//! Video page URL validation.

use url::Url;

use super::errors::DownloadError;

/// Validate user input as an absolute `http`/`https` URL with a host.
///
/// Performs no I/O; callers run this before touching the resolver.
pub fn validate_url(raw: &str) -> Result<Url, DownloadError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DownloadError::invalid_url(trimmed, "URL is empty"));
    }

    let url =
        Url::parse(trimmed).map_err(|e| DownloadError::invalid_url(trimmed, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(DownloadError::invalid_url(
            trimmed,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(DownloadError::invalid_url(trimmed, "URL has no host"));
    }

    Ok(url)
}
