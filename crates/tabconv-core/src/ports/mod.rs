//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process/HTTP/filesystem implementation details in signatures
//! - Errors are the serializable domain error enums

pub mod media_downloader;
pub mod settings_repository;
pub mod stream_resolver;
pub mod transcode_runner;

use thiserror::Error;

pub use media_downloader::MediaDownloader;
pub use settings_repository::SettingsRepository;
pub use stream_resolver::StreamResolver;
pub use transcode_runner::TranscodeRunner;

/// Domain-specific errors for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Error returned by the settings service.
///
/// Adapters map this to their own error types (CLI exit codes, GUI
/// notifications).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
