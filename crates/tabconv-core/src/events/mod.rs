//! Job events delivered from a background worker to the UI owner.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag so a web or desktop front-end
//! can switch on them:
//!
//! ```json
//! { "type": "busy", "active": true, "label": "Converting..." }
//! ```

mod notification;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::transcode::TranscodeOutcome;

pub use notification::{
    CONVERSION_FAILED, CONVERSION_SUCCEEDED, CONVERSION_TITLE, ErrorCategory, JOB_STOPPED,
    Notification, NotificationAction, NotificationKind,
};

/// Label shown on the busy indicator while a download runs.
pub const DOWNLOADING_LABEL: &str = "Downloading...";

/// Label shown on the busy indicator while a conversion runs.
pub const CONVERTING_LABEL: &str = "Converting...";

/// One update from a running job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobEvent {
    /// Show or hide the busy indicator.
    Busy {
        active: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },

    /// Determinate progress, 0 to 100.
    Progress { percent: f64 },

    /// Something to show the user.
    Notification { notification: Notification },

    /// Terminal result. Always followed by `Busy { active: false }`.
    Finished { result: JobResult },
}

impl JobEvent {
    pub fn busy(label: impl Into<String>) -> Self {
        Self::Busy {
            active: true,
            label: Some(label.into()),
        }
    }

    pub const fn idle() -> Self {
        Self::Busy {
            active: false,
            label: None,
        }
    }

    pub const fn notification(notification: Notification) -> Self {
        Self::Notification { notification }
    }

    pub const fn finished(result: JobResult) -> Self {
        Self::Finished { result }
    }

    /// Whether this event clears the busy indicator.
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Busy { active: false, .. })
    }
}

/// How a job ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobResult {
    /// The stream was saved; `path` can become the next conversion's input.
    Downloaded { path: PathBuf },
    /// The transcoder ran. Check `outcome.success()`.
    Transcoded { outcome: TranscodeOutcome },
    /// The job stopped early; details were sent as a notification.
    Failed { message: String },
}

impl JobResult {
    /// Download finished, or the transcoder exited 0.
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Downloaded { .. } => true,
            Self::Transcoded { outcome } => outcome.success(),
            Self::Failed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_wire_format() {
        let json = serde_json::to_value(JobEvent::busy(CONVERTING_LABEL)).unwrap();
        assert_eq!(json["type"], "busy");
        assert_eq!(json["active"], true);
        assert_eq!(json["label"], CONVERTING_LABEL);

        let idle = serde_json::to_value(JobEvent::idle()).unwrap();
        assert!(idle.get("label").is_none());
    }

    #[test]
    fn test_is_idle() {
        assert!(JobEvent::idle().is_idle());
        assert!(!JobEvent::busy(DOWNLOADING_LABEL).is_idle());
        assert!(!JobEvent::Progress { percent: 1.0 }.is_idle());
    }

    #[test]
    fn test_result_success() {
        assert!(
            JobResult::Downloaded {
                path: PathBuf::from("a.webm")
            }
            .is_success()
        );
        assert!(
            !JobResult::Failed {
                message: "x".into()
            }
            .is_success()
        );
    }
}
