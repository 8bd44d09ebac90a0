//! Settings domain types and validation.
//!
//! This module contains the persisted settings shape. Storage lives in an
//! adapter behind `SettingsRepository`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{DEFAULT_MAX_RESOLUTION, DEFAULT_TARGET_FORMAT, StreamCriteria, VideoFormat};
use crate::transcode::{
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_SUFFIX, OutputNaming, TranscodePreset,
    TranscoderConfig,
};

/// Environment variable that overrides `transcoder_path`.
pub const TRANSCODER_PATH_ENV: &str = "TABCONV_TRANSCODER_PATH";

/// Environment variable that overrides `resolver_path`.
pub const RESOLVER_PATH_ENV: &str = "TABCONV_RESOLVER_PATH";

/// Tallest stream height accepted as a resolution bound.
pub const MAX_RESOLUTION_LIMIT: u32 = 4320;

/// Application settings structure.
///
/// All fields are optional to support partial files and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path to the ffmpeg executable.
    pub transcoder_path: Option<String>,

    /// Path to the yt-dlp executable. Looked up on `PATH` when unset.
    pub resolver_path: Option<String>,

    /// Directory downloads are saved to when no destination is given.
    pub download_dir: Option<String>,

    /// Container to download.
    pub preferred_format: Option<VideoFormat>,

    /// Tallest stream to download (inclusive).
    pub max_resolution: Option<u32>,

    /// Appended to the input stem when naming converted files.
    pub output_suffix: Option<String>,

    /// Extension of converted files.
    pub output_extension: Option<String>,

    /// Transcoder flags.
    pub preset: Option<TranscodePreset>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            transcoder_path: None,
            resolver_path: None,
            download_dir: None,
            preferred_format: Some(DEFAULT_TARGET_FORMAT),
            max_resolution: Some(DEFAULT_MAX_RESOLUTION),
            output_suffix: Some(DEFAULT_OUTPUT_SUFFIX.to_string()),
            output_extension: Some(DEFAULT_OUTPUT_EXTENSION.to_string()),
            preset: Some(TranscodePreset::default()),
        }
    }

    /// Stream filter with default fallback.
    #[must_use]
    pub fn stream_criteria(&self) -> StreamCriteria {
        StreamCriteria::new(
            self.preferred_format.unwrap_or(DEFAULT_TARGET_FORMAT),
            self.max_resolution.unwrap_or(DEFAULT_MAX_RESOLUTION),
        )
    }

    /// Output naming with default fallback.
    #[must_use]
    pub fn output_naming(&self) -> OutputNaming {
        OutputNaming::new(
            self.output_suffix.as_deref().unwrap_or(DEFAULT_OUTPUT_SUFFIX),
            self.output_extension
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_EXTENSION),
        )
    }

    /// Everything the transcode runner needs from settings.
    #[must_use]
    pub fn transcoder_config(&self) -> TranscoderConfig {
        TranscoderConfig {
            program: self
                .transcoder_path
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            preset: self.preset.clone().unwrap_or_default(),
            naming: self.output_naming(),
        }
    }

    /// Replace executable paths with values from `lookup` (normally the
    /// process environment). Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(TRANSCODER_PATH_ENV) {
            self.transcoder_path = Some(path);
        }
        if let Some(path) = value(RESOLVER_PATH_ENV) {
            self.resolver_path = Some(path);
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref path) = other.transcoder_path {
            self.transcoder_path.clone_from(path);
        }
        if let Some(ref path) = other.resolver_path {
            self.resolver_path.clone_from(path);
        }
        if let Some(ref dir) = other.download_dir {
            self.download_dir.clone_from(dir);
        }
        if let Some(format) = other.preferred_format {
            self.preferred_format = format;
        }
        if let Some(resolution) = other.max_resolution {
            self.max_resolution = resolution;
        }
        if let Some(ref suffix) = other.output_suffix {
            self.output_suffix.clone_from(suffix);
        }
        if let Some(ref ext) = other.output_extension {
            self.output_extension.clone_from(ext);
        }
        if let Some(ref preset) = other.preset {
            self.preset.clone_from(preset);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub transcoder_path: Option<Option<String>>,
    pub resolver_path: Option<Option<String>>,
    pub download_dir: Option<Option<String>>,
    pub preferred_format: Option<Option<VideoFormat>>,
    pub max_resolution: Option<Option<u32>>,
    pub output_suffix: Option<Option<String>>,
    pub output_extension: Option<Option<String>>,
    pub preset: Option<Option<TranscodePreset>>,
}

impl SettingsUpdate {
    /// Whether applying this update would change nothing.
    pub const fn is_empty(&self) -> bool {
        self.transcoder_path.is_none()
            && self.resolver_path.is_none()
            && self.download_dir.is_none()
            && self.preferred_format.is_none()
            && self.max_resolution.is_none()
            && self.output_suffix.is_none()
            && self.output_extension.is_none()
            && self.preset.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Max resolution must be between 1 and 4320, got {0}")]
    InvalidMaxResolution(u32),

    #[error("Preferred format must be one of mp4, webm, flv, 3gp")]
    UnsupportedFormat,

    #[error("Output suffix cannot be empty (the converted file would overwrite the input)")]
    EmptyOutputSuffix,

    #[error("Output suffix cannot contain path separators, got '{0}'")]
    InvalidOutputSuffix(String),

    #[error("Output extension must be non-empty letters and digits, got '{0}'")]
    InvalidOutputExtension(String),

    #[error("{0} path cannot be empty")]
    EmptyPath(&'static str),

    #[error("Preset field '{0}' cannot be empty")]
    EmptyPresetField(&'static str),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(resolution) = settings.max_resolution {
        if !(1..=MAX_RESOLUTION_LIMIT).contains(&resolution) {
            return Err(SettingsError::InvalidMaxResolution(resolution));
        }
    }

    if settings.preferred_format == Some(VideoFormat::Unknown) {
        return Err(SettingsError::UnsupportedFormat);
    }

    if let Some(ref suffix) = settings.output_suffix {
        if suffix.is_empty() {
            return Err(SettingsError::EmptyOutputSuffix);
        }
        if suffix.contains(['/', '\\']) {
            return Err(SettingsError::InvalidOutputSuffix(suffix.clone()));
        }
    }

    if let Some(ref ext) = settings.output_extension {
        let ext = ext.trim_start_matches('.');
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SettingsError::InvalidOutputExtension(ext.to_string()));
        }
    }

    for (label, value) in [
        ("Transcoder", &settings.transcoder_path),
        ("Resolver", &settings.resolver_path),
        ("Download", &settings.download_dir),
    ] {
        if value.as_ref().is_some_and(|p| p.trim().is_empty()) {
            return Err(SettingsError::EmptyPath(label));
        }
    }

    if let Some(ref preset) = settings.preset {
        validate_preset(preset)?;
    }

    Ok(())
}

fn validate_preset(preset: &TranscodePreset) -> Result<(), SettingsError> {
    let fields = [
        ("video_codec", &preset.video_codec),
        ("profile", &preset.profile),
        ("video_bitrate", &preset.video_bitrate),
        ("frame_rate", &preset.frame_rate),
        ("size", &preset.size),
        ("aspect", &preset.aspect),
        ("audio_codec", &preset.audio_codec),
        ("audio_filter", &preset.audio_filter),
        ("audio_bitrate", &preset.audio_bitrate),
        ("audio_sample_rate", &preset.audio_sample_rate),
    ];

    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(SettingsError::EmptyPresetField(*name)),
        None => Ok(()),
    }
}
