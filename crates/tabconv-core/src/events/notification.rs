//! User-facing notifications.
//!
//! A notification is the modal-dialog analogue: the UI owner shows it and
//! optionally offers its action. Every failure a job can hit maps to one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::download::DownloadError;
use crate::transcode::{TranscodeError, TranscodeOutcome};

/// Title of every conversion result notification.
pub const CONVERSION_TITLE: &str = "Conversion";

/// Shown when the transcoder exits 0.
pub const CONVERSION_SUCCEEDED: &str = "Conversion completed successfully.";

/// Shown when the transcoder exits nonzero.
pub const CONVERSION_FAILED: &str = "Conversion failed - see log for more information.";

/// Shown when a job worker stops without producing a result.
pub const JOB_STOPPED: &str = "The operation stopped unexpectedly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Error,
}

/// The three user-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The URL text is not a usable video page address.
    InvalidUrl,
    /// The video has no stream matching the format and resolution bound.
    NoSuitableStream,
    /// The transcoder is missing, failed to start, or exited nonzero.
    Transcoder,
}

/// Follow-up the UI may offer alongside a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "snake_case")]
pub enum NotificationAction {
    /// Open the transcoder log in the platform default application.
    OpenLog(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<NotificationAction>,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            category: None,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    pub fn error(
        category: Option<ErrorCategory>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: NotificationKind::Error,
            category,
            title: title.into(),
            message: message.into(),
            action: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NotificationKind::Error)
    }

    /// Log path to offer, if this notification carries an open-log action.
    pub fn log_to_open(&self) -> Option<&Path> {
        match &self.action {
            Some(NotificationAction::OpenLog(path)) => Some(path),
            None => None,
        }
    }

    /// A worker that unwound before reporting its result.
    pub fn job_stopped(category: Option<ErrorCategory>) -> Self {
        Self::error(category, "Error", JOB_STOPPED)
    }

    /// Result of a transcoder run that started and exited.
    pub fn from_outcome(outcome: &TranscodeOutcome) -> Self {
        if outcome.success() {
            Self::info(CONVERSION_TITLE, CONVERSION_SUCCEEDED)
        } else {
            Self::error(
                Some(ErrorCategory::Transcoder),
                CONVERSION_TITLE,
                CONVERSION_FAILED,
            )
            .with_action(NotificationAction::OpenLog(outcome.log_path.clone()))
        }
    }
}

impl From<&DownloadError> for Notification {
    fn from(err: &DownloadError) -> Self {
        Self::error(err.category(), err.title(), err.user_message())
    }
}

impl From<&TranscodeError> for Notification {
    /// No log exists when the transcoder never ran, so no action is attached.
    fn from(err: &TranscodeError) -> Self {
        Self::error(err.category(), err.title(), err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoFormat;

    fn outcome(exit_code: Option<i32>) -> TranscodeOutcome {
        TranscodeOutcome {
            exit_code,
            output: PathBuf::from("/v/a-converted.avi"),
            log_path: PathBuf::from("/v/a.log"),
            command_line: "\"ffmpeg\" -y -i \"/v/a.mp4\"".to_string(),
        }
    }

    #[test]
    fn test_success_has_no_action() {
        let note = Notification::from_outcome(&outcome(Some(0)));
        assert_eq!(note.kind, NotificationKind::Info);
        assert_eq!(note.message, CONVERSION_SUCCEEDED);
        assert!(note.action.is_none());
    }

    #[test]
    fn test_failure_offers_log() {
        for code in [Some(1), None] {
            let note = Notification::from_outcome(&outcome(code));
            assert!(note.is_error());
            assert_eq!(note.category, Some(ErrorCategory::Transcoder));
            assert_eq!(note.log_to_open(), Some(Path::new("/v/a.log")));
        }
    }

    #[test]
    fn test_spawn_failure_has_no_action() {
        let note = Notification::from(&TranscodeError::spawn_failed("ffmpeg", "denied"));
        assert!(note.is_error());
        assert!(note.action.is_none());
        assert_eq!(note.category, Some(ErrorCategory::Transcoder));
    }

    #[test]
    fn test_download_error_mapping() {
        let note = Notification::from(&DownloadError::no_suitable_stream(VideoFormat::WebM, 480));
        assert_eq!(note.title, "Url Error");
        assert_eq!(note.category, Some(ErrorCategory::NoSuitableStream));
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(NotificationAction::OpenLog(PathBuf::from("/v/a.log")))
            .unwrap();
        assert_eq!(json["type"], "open_log");
        assert_eq!(json["path"], "/v/a.log");
    }
}
