//! Core domain types and port definitions for tabconv.
//!
//! tabconv downloads a video from a hosting page and re-encodes local video
//! files with an external transcoder. This crate holds everything that does
//! not talk to the network or spawn processes: stream selection, naming
//! rules, the transcoder preset, settings, events and the ports adapters
//! implement.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod download;
pub mod events;
pub mod paths;
pub mod ports;
pub mod selector;
pub mod services;
pub mod settings;
pub mod transcode;

pub use domain::{
    FileFilter, ResolvedVideo, SaveSuggestion, StreamCriteria, StreamDescriptor, VideoFormat,
    clean_filename, is_supported_video, open_dialog_filter,
};
pub use download::{
    DownloadError, DownloadPlan, DownloadProgress, ProgressCallback, validate_url,
};
pub use events::{
    ErrorCategory, JobEvent, JobResult, Notification, NotificationAction, NotificationKind,
};
pub use ports::{
    CoreError, MediaDownloader, RepositoryError, SettingsRepository, StreamResolver,
    TranscodeRunner,
};
pub use selector::{select_best, select_with, selected_index};
pub use services::SettingsService;
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};
pub use transcode::{
    OutputNaming, TranscodeError, TranscodeJob, TranscodeOutcome, TranscodePreset,
    TranscoderConfig,
};

pub use paths::{PathError, ResolvedPaths, data_root, settings_path};

// Used by the integration tests under tests/
#[cfg(test)]
use mockall as _;
