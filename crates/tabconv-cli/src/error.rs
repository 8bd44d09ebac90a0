//! CLI-specific error types and exit codes.

use tabconv_core::{DownloadError, ErrorCategory, TranscodeError};
use tabconv_gui::GuiError;
use thiserror::Error;

/// CLI-specific error type.
///
/// The display text is what the user sees after `Error:`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad input such as an invalid URL.
    #[error("{0}")]
    Arguments(String),

    /// Nothing usable behind the URL, or the network failed.
    #[error("{0}")]
    Unavailable(String),

    /// The transcoder or resolver could not be started.
    #[error("{0}")]
    Process(String),

    /// Refused to replace an existing file.
    #[error("{0}")]
    Exists(String),

    #[error("IO error: {0}")]
    Io(String),

    /// Another job holds the backend.
    #[error("{0}")]
    Busy(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A job failed and its notification was already printed.
    #[error("job failed")]
    Reported { code: i32 },
}

impl CliError {
    /// Exit status for a job whose failure was shown as a notification.
    pub const fn reported(category: Option<ErrorCategory>) -> Self {
        let code = match category {
            Some(ErrorCategory::InvalidUrl) => 64,
            Some(ErrorCategory::NoSuitableStream) => 69,
            Some(ErrorCategory::Transcoder) | None => 1,
        };
        Self::Reported { code }
    }

    /// Whether the message was already shown to the user.
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported { .. })
    }

    /// Map error to a sysexits-style exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Reported { code } => *code,
            Self::Arguments(_) => 64,   // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,     // EX_OSERR
            Self::Exists(_) => 73,      // EX_CANTCREAT
            Self::Io(_) => 74,          // EX_IOERR
            Self::Busy(_) => 75,        // EX_TEMPFAIL
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<DownloadError> for CliError {
    fn from(err: DownloadError) -> Self {
        let message = err.user_message();
        match err {
            DownloadError::InvalidUrl { .. } => Self::Arguments(message),
            DownloadError::NoSuitableStream { .. }
            | DownloadError::ResolutionFailed { .. }
            | DownloadError::Network { .. } => Self::Unavailable(message),
            DownloadError::ResolverMissing { .. } => Self::Config(message),
            DownloadError::DestinationExists { .. } => Self::Exists(message),
            DownloadError::Io { .. } => Self::Io(message),
        }
    }
}

impl From<TranscodeError> for CliError {
    fn from(err: TranscodeError) -> Self {
        let message = err.user_message();
        match err {
            TranscodeError::InputMissing { .. } | TranscodeError::SameAsInput { .. } => {
                Self::Arguments(message)
            }
            TranscodeError::TranscoderNotConfigured | TranscodeError::TranscoderMissing { .. } => {
                Self::Config(message)
            }
            TranscodeError::SpawnFailed { .. } => Self::Process(message),
            TranscodeError::Io { .. } | TranscodeError::LogWrite { .. } => Self::Io(message),
        }
    }
}

impl From<GuiError> for CliError {
    fn from(err: GuiError) -> Self {
        match err {
            GuiError::Download(e) => e.into(),
            GuiError::Transcode(e) => e.into(),
            GuiError::ValidationFailed(msg) => Self::Config(msg),
            GuiError::Conflict(msg) => Self::Busy(msg),
            GuiError::Storage(msg) => Self::Config(msg),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
