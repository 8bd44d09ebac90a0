//! Stream descriptor types.
//!
//! These describe the downloadable encodings a resolver found for a video
//! page. They are produced by a `StreamResolver` adapter and are read-only
//! input to stream selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default container preferred when picking a stream to download.
pub const DEFAULT_TARGET_FORMAT: VideoFormat = VideoFormat::WebM;

/// Default upper bound (inclusive) on stream height when picking a stream.
pub const DEFAULT_MAX_RESOLUTION: u32 = 480;

/// Container/codec tag of a downloadable stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    /// MPEG-4 container.
    Mp4,
    /// `WebM` container.
    #[serde(rename = "webm")]
    WebM,
    /// Flash video.
    Flv,
    /// 3GP, the legacy mobile container.
    #[serde(rename = "3gp")]
    ThreeGp,
    /// Anything the resolver reported that we do not recognise.
    Unknown,
}

impl VideoFormat {
    /// Classify a container from its file extension (with or without the dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "mp4" | "m4v" => Self::Mp4,
            "webm" => Self::WebM,
            "flv" => Self::Flv,
            "3gp" => Self::ThreeGp,
            _ => Self::Unknown,
        }
    }

    /// Canonical file extension, without the leading dot.
    ///
    /// `Unknown` maps to a generic `bin` so a save path can always be built.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::WebM => "webm",
            Self::Flv => "flv",
            Self::ThreeGp => "3gp",
            Self::Unknown => "bin",
        }
    }

    /// Stable lowercase name used in settings and CLI arguments.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::WebM => "webm",
            Self::Flv => "flv",
            Self::ThreeGp => "3gp",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_extension(s) {
            Self::Unknown => Err(format!(
                "unsupported format '{s}' (expected one of: mp4, webm, flv, 3gp)"
            )),
            format => Ok(format),
        }
    }
}

/// One downloadable encoding of a remote video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Container tag.
    pub format: VideoFormat,
    /// Frame height in pixels.
    pub resolution: u32,
    /// Title of the video this stream belongs to.
    pub title: String,
    /// Direct URL of the media bytes.
    pub url: String,
    /// Size in bytes, when the resolver knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl StreamDescriptor {
    /// Create a descriptor with an unknown size.
    pub fn new(
        format: VideoFormat,
        resolution: u32,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            format,
            resolution,
            title: title.into(),
            url: url.into(),
            size: None,
        }
    }

    /// Set the size in bytes.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Whether this stream passes the selection filter for `criteria`.
    pub fn matches(&self, criteria: &StreamCriteria) -> bool {
        self.format == criteria.format && self.resolution <= criteria.max_resolution
    }
}

/// Everything a resolver learned about a video page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedVideo {
    /// Human-readable title of the video.
    pub title: String,
    /// Candidate streams in the order the resolver reported them.
    pub streams: Vec<StreamDescriptor>,
}

/// Filter applied when choosing which stream to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCriteria {
    /// Required container.
    pub format: VideoFormat,
    /// Inclusive upper bound on stream height.
    pub max_resolution: u32,
}

impl StreamCriteria {
    pub const fn new(format: VideoFormat, max_resolution: u32) -> Self {
        Self {
            format,
            max_resolution,
        }
    }
}

impl Default for StreamCriteria {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FORMAT, DEFAULT_MAX_RESOLUTION)
    }
}
