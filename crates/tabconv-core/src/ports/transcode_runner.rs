//! Transcode runner port.

use std::path::Path;

use async_trait::async_trait;

use crate::transcode::{TranscodeError, TranscodeOutcome, TranscoderConfig};

/// Runs the external transcoder on one input file.
///
/// # Design Rules
///
/// - Preconditions are checked before anything is spawned
/// - A nonzero exit is an `Ok` outcome, not an error
/// - A log file is written for every process that started
#[async_trait]
pub trait TranscodeRunner: Send + Sync {
    async fn run(
        &self,
        input: &Path,
        config: &TranscoderConfig,
    ) -> Result<TranscodeOutcome, TranscodeError>;
}
