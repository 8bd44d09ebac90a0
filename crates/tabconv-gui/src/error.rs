//! Semantic error types for GUI operations.
//!
//! Front-ends either show [`GuiError::to_notification`] as a modal message
//! or map the variant to their own error type.

use std::fmt;

use tabconv_core::{
    CoreError, DownloadError, Notification, PathError, SettingsError, TranscodeError,
};

#[derive(Debug, Clone)]
pub enum GuiError {
    /// Request validation failed (bad settings value, unusable path).
    ValidationFailed(String),

    /// Operation conflicts with current state (a job is already running).
    Conflict(String),

    /// URL, resolver or transfer problem.
    Download(DownloadError),

    /// Conversion precondition or process failure.
    Transcode(TranscodeError),

    /// The settings file could not be read or written.
    Storage(String),
}

impl GuiError {
    /// The message box a window would show for this error.
    pub fn to_notification(&self) -> Notification {
        match self {
            Self::Download(err) => Notification::from(err),
            Self::Transcode(err) => Notification::from(err),
            Self::Conflict(msg) => Notification::error(None, "Busy", msg.clone()),
            Self::ValidationFailed(msg) => Notification::error(None, "Settings", msg.clone()),
            Self::Storage(msg) => Notification::error(None, "Settings", msg.clone()),
        }
    }
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Conflict(msg) => write!(f, "conflict: {msg}"),
            Self::Download(err) => write!(f, "{err}"),
            Self::Transcode(err) => write!(f, "{err}"),
            Self::Storage(msg) => write!(f, "settings storage: {msg}"),
        }
    }
}

impl std::error::Error for GuiError {}

// ============================================================================
// Conversions from core errors
// ============================================================================

impl From<DownloadError> for GuiError {
    fn from(err: DownloadError) -> Self {
        Self::Download(err)
    }
}

impl From<TranscodeError> for GuiError {
    fn from(err: TranscodeError) -> Self {
        Self::Transcode(err)
    }
}

impl From<SettingsError> for GuiError {
    fn from(err: SettingsError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

impl From<PathError> for GuiError {
    fn from(err: PathError) -> Self {
        Self::ValidationFailed(err.to_string())
    }
}

impl From<CoreError> for GuiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(e) => e.into(),
            CoreError::Repository(e) => Self::Storage(e.to_string()),
        }
    }
}
