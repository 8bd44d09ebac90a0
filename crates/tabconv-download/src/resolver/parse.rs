//! Parsing of `yt-dlp --dump-single-json` output.

use serde::Deserialize;
use tabconv_core::{DownloadError, ResolvedVideo, StreamDescriptor, VideoFormat};

#[derive(Debug, Deserialize)]
struct InfoJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    formats: Vec<FormatJson>,
}

#[derive(Debug, Deserialize)]
struct FormatJson {
    #[serde(default)]
    ext: Option<String>,
    #[serde(default)]
    height: Option<u64>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    vcodec: Option<String>,
    #[serde(default)]
    acodec: Option<String>,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    filesize: Option<u64>,
    #[serde(default)]
    filesize_approx: Option<u64>,
}

impl FormatJson {
    /// A real codec name; yt-dlp uses `"none"` for a missing track.
    fn has_codec(codec: Option<&str>) -> bool {
        codec.is_some_and(|c| !c.is_empty() && c != "none")
    }

    /// Single progressive file over plain HTTP(S), with both tracks.
    fn is_progressive(&self) -> bool {
        let plain_http = self
            .protocol
            .as_deref()
            .is_none_or(|p| matches!(p, "http" | "https"));

        plain_http
            && Self::has_codec(self.vcodec.as_deref())
            && Self::has_codec(self.acodec.as_deref())
    }

    fn into_descriptor(self, title: &str) -> Option<StreamDescriptor> {
        if !self.is_progressive() {
            return None;
        }
        let url = self.url?;
        let resolution = u32::try_from(self.height?).ok()?;
        let format = VideoFormat::from_extension(self.ext.as_deref().unwrap_or_default());

        Some(StreamDescriptor {
            format,
            resolution,
            title: title.to_string(),
            url,
            size: self.filesize.or(self.filesize_approx),
        })
    }
}

/// Turn resolver JSON into a [`ResolvedVideo`], keeping only streams that
/// can be downloaded as one file.
pub fn parse_info_json(raw: &str) -> Result<ResolvedVideo, DownloadError> {
    let info: InfoJson = serde_json::from_str(raw)
        .map_err(|e| DownloadError::resolution_failed(format!("unreadable resolver output: {e}")))?;

    let title = info.title.unwrap_or_default();
    let streams = info
        .formats
        .into_iter()
        .filter_map(|format| format.into_descriptor(&title))
        .collect();

    Ok(ResolvedVideo { title, streams })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "title": "Big Buck Bunny",
        "formats": [
            {"format_id": "sb0", "ext": "mhtml", "protocol": "mhtml", "vcodec": "none", "acodec": "none"},
            {"format_id": "43", "ext": "webm", "height": 360, "url": "https://cdn/43",
             "vcodec": "vp8.0", "acodec": "vorbis", "protocol": "https", "filesize": 1024},
            {"format_id": "18", "ext": "mp4", "height": 360, "url": "https://cdn/18",
             "vcodec": "avc1.42001E", "acodec": "mp4a.40.2", "protocol": "https", "filesize_approx": 2048},
            {"format_id": "248", "ext": "webm", "height": 1080, "url": "https://cdn/248",
             "vcodec": "vp9", "acodec": "none", "protocol": "https"},
            {"format_id": "251", "ext": "webm", "url": "https://cdn/251",
             "vcodec": "none", "acodec": "opus", "protocol": "https"},
            {"format_id": "hls-1", "ext": "mp4", "height": 480, "url": "https://cdn/hls",
             "vcodec": "avc1", "acodec": "mp4a", "protocol": "m3u8_native"}
        ]
    }"#;

    #[test]
    fn test_keeps_only_progressive_streams() {
        let video = parse_info_json(SAMPLE).unwrap();
        assert_eq!(video.title, "Big Buck Bunny");
        assert_eq!(video.streams.len(), 2);

        let webm = &video.streams[0];
        assert_eq!(webm.format, VideoFormat::WebM);
        assert_eq!(webm.resolution, 360);
        assert_eq!(webm.url, "https://cdn/43");
        assert_eq!(webm.size, Some(1024));
        assert_eq!(webm.title, "Big Buck Bunny");

        assert_eq!(video.streams[1].format, VideoFormat::Mp4);
        assert_eq!(video.streams[1].size, Some(2048));
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let video = parse_info_json(r#"{"id": "x"}"#).unwrap();
        assert!(video.title.is_empty());
        assert!(video.streams.is_empty());
    }

    #[test]
    fn test_garbage_is_resolution_failure() {
        let err = parse_info_json("ERROR: not json").unwrap_err();
        assert!(matches!(err, DownloadError::ResolutionFailed { .. }));
    }
}
