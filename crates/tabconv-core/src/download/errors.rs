//! Download error types.
//!
//! These errors are serializable so they can cross the GUI event channel.
//! I/O errors are captured as kind + message strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::VideoFormat;
use crate::events::ErrorCategory;

/// Example shown to users who paste something that is not a video page URL.
pub const EXAMPLE_VIDEO_URL: &str = "https://www.youtube.com/watch?v=3PADxcM_Vi8";

/// Error type for resolving and downloading a video.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadError {
    /// The text the user supplied is not an absolute http(s) URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected input, trimmed.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// No stream passed the format/resolution filter.
    #[error("No {format} stream at or below {max_resolution}p")]
    NoSuitableStream {
        format: VideoFormat,
        max_resolution: u32,
    },

    /// The resolver ran but could not describe the video.
    #[error("Resolution failed: {message}")]
    ResolutionFailed {
        /// Detailed error message.
        message: String,
    },

    /// The resolver executable could not be found or started.
    #[error("Resolver not available: {message}")]
    ResolverMissing {
        /// Detailed error message.
        message: String,
    },

    /// I/O error during file operations.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g., "`NotFound`", "`PermissionDenied`").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// Network/HTTP error during download.
    #[error("Network error: {message}")]
    Network {
        /// Detailed error message.
        message: String,
        /// HTTP status code if available.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// The destination already exists and overwriting was not requested.
    #[error("Destination already exists: {path}")]
    DestinationExists { path: String },
}

impl DownloadError {
    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a no-suitable-stream error.
    #[must_use]
    pub const fn no_suitable_stream(format: VideoFormat, max_resolution: u32) -> Self {
        Self::NoSuitableStream {
            format,
            max_resolution,
        }
    }

    /// Create a resolution failed error.
    pub fn resolution_failed(message: impl Into<String>) -> Self {
        Self::ResolutionFailed {
            message: message.into(),
        }
    }

    /// Create a resolver missing error.
    pub fn resolver_missing(message: impl Into<String>) -> Self {
        Self::ResolverMissing {
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a network error with HTTP status code.
    pub fn network_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Network {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a destination-exists error.
    pub fn destination_exists(path: impl Into<String>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// User-facing category, when the error belongs to one.
    #[must_use]
    pub const fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::InvalidUrl { .. } => Some(ErrorCategory::InvalidUrl),
            Self::NoSuitableStream { .. } => Some(ErrorCategory::NoSuitableStream),
            _ => None,
        }
    }

    /// Short title for a notification about this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "Invalid Url",
            Self::NoSuitableStream { .. } | Self::ResolutionFailed { .. } => "Url Error",
            Self::ResolverMissing { .. } => "Resolver",
            Self::DestinationExists { .. } => "Filename",
            Self::Io { .. } | Self::Network { .. } => "Download",
        }
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl { .. } => format!(
                "Please enter the full URL to the YouTube page\n\ne.g. {EXAMPLE_VIDEO_URL}"
            ),
            Self::NoSuitableStream { .. } => {
                "Unable to download a suitable format for conversion.".to_string()
            }
            Self::ResolutionFailed { message } => format!("Could not read the video page: {message}"),
            Self::ResolverMissing { message } => format!(
                "Unable to run the stream resolver, please check the resolver path in settings. ({message})"
            ),
            Self::Io { message, .. } => format!("File operation failed: {message}"),
            Self::Network {
                message,
                status_code: Some(code),
            } => format!("Network error (HTTP {code}): {message}"),
            Self::Network { message, .. } => format!("Network error: {message}"),
            Self::DestinationExists { path } => {
                format!("'{path}' already exists. Choose another name or allow overwriting.")
            }
        }
    }
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        Self::from_io_error(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DownloadError::from_io_error(&io_err);

        match err {
            DownloadError::Io { kind, message } => {
                assert_eq!(kind, "NotFound");
                assert!(message.contains("file not found"));
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = DownloadError::network_with_status("forbidden", 403);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("403"));

        let parsed: DownloadError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            DownloadError::invalid_url("x", "relative URL without a base").category(),
            Some(ErrorCategory::InvalidUrl)
        );
        assert_eq!(
            DownloadError::no_suitable_stream(VideoFormat::WebM, 480).category(),
            Some(ErrorCategory::NoSuitableStream)
        );
        assert_eq!(DownloadError::network("reset").category(), None);
    }

    #[test]
    fn test_user_messages() {
        let invalid = DownloadError::invalid_url("nope", "missing scheme");
        assert_eq!(invalid.title(), "Invalid Url");
        assert!(invalid.user_message().contains(EXAMPLE_VIDEO_URL));

        let none = DownloadError::no_suitable_stream(VideoFormat::WebM, 480);
        assert_eq!(none.title(), "Url Error");
        assert_eq!(
            none.user_message(),
            "Unable to download a suitable format for conversion."
        );
    }
}
