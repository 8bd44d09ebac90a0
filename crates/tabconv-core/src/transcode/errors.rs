//! Transcode error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::ErrorCategory;

/// Message shown whenever the transcoder binary cannot be used.
pub const TRANSCODER_UNAVAILABLE_MESSAGE: &str =
    "Unable to load ffmpeg, please make sure you have placed it in the correct location...";

/// Errors raised before or while running the external transcoder.
///
/// A process that starts and exits nonzero is not an error; it is a
/// `TranscodeOutcome` whose `success()` is false.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TranscodeError {
    /// The input path does not name an existing regular file.
    #[error("Input file not found: {path}")]
    InputMissing { path: String },

    /// No transcoder path is configured.
    #[error("Transcoder path is not configured")]
    TranscoderNotConfigured,

    /// A transcoder path is configured but nothing exists there.
    #[error("Transcoder not found at {path}")]
    TranscoderMissing { path: String },

    /// The derived output path would overwrite the input.
    #[error("Output path equals input path: {path}")]
    SameAsInput { path: String },

    /// The operating system refused to start the process.
    #[error("Failed to start {program}: {message}")]
    SpawnFailed { program: String, message: String },

    /// I/O failure while the process was running.
    #[error("I/O error ({kind}): {message}")]
    Io { kind: String, message: String },

    /// The log file could not be written.
    #[error("Failed to write log {path}: {message}")]
    LogWrite { path: String, message: String },
}

impl TranscodeError {
    pub fn input_missing(path: impl Into<String>) -> Self {
        Self::InputMissing { path: path.into() }
    }

    pub fn transcoder_missing(path: impl Into<String>) -> Self {
        Self::TranscoderMissing { path: path.into() }
    }

    pub fn spawn_failed(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    pub fn log_write(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::LogWrite {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether the failure happened before any process was spawned.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InputMissing { .. }
                | Self::TranscoderNotConfigured
                | Self::TranscoderMissing { .. }
                | Self::SameAsInput { .. }
        )
    }

    /// User-facing category; input selection problems have none.
    #[must_use]
    pub const fn category(&self) -> Option<ErrorCategory> {
        match self {
            Self::InputMissing { .. } | Self::SameAsInput { .. } => None,
            _ => Some(ErrorCategory::Transcoder),
        }
    }

    /// Short title for a notification about this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InputMissing { .. } | Self::SameAsInput { .. } => "Filename",
            Self::TranscoderNotConfigured
            | Self::TranscoderMissing { .. }
            | Self::SpawnFailed { .. } => "FFMpeg",
            Self::Io { .. } | Self::LogWrite { .. } => "Conversion",
        }
    }

    /// Convert to a user-friendly message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InputMissing { .. } => "Please select a valid file..".to_string(),
            Self::SameAsInput { path } => {
                format!("The converted file would overwrite the original ({path}).")
            }
            Self::TranscoderNotConfigured | Self::TranscoderMissing { .. } => {
                TRANSCODER_UNAVAILABLE_MESSAGE.to_string()
            }
            Self::SpawnFailed { message, .. } => {
                format!("{TRANSCODER_UNAVAILABLE_MESSAGE} ({message})")
            }
            Self::Io { message, .. } => format!("Conversion failed: {message}"),
            Self::LogWrite { path, message } => {
                format!("Conversion finished but the log could not be written to {path}: {message}")
            }
        }
    }
}
