//! Transcode domain types: preset, naming rules, job and outcome.

mod config;
mod errors;
mod job;
mod naming;
mod preset;

pub use config::TranscoderConfig;
pub use errors::{TRANSCODER_UNAVAILABLE_MESSAGE, TranscodeError};
pub use job::{TranscodeJob, TranscodeOutcome};
pub use naming::{DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_SUFFIX, OutputNaming, log_path_for};
pub use preset::TranscodePreset;
