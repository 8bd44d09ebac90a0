//! Resolved transcoder configuration and precondition checks.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::TranscodeError;
use super::job::TranscodeJob;
use super::naming::OutputNaming;
use super::preset::TranscodePreset;

/// Everything the runner needs besides the input path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscoderConfig {
    /// Path to the transcoder executable, if one is configured.
    pub program: Option<PathBuf>,
    pub preset: TranscodePreset,
    pub naming: OutputNaming,
}

impl TranscoderConfig {
    pub fn new(program: Option<PathBuf>) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }

    /// Validate the input and transcoder, then build the job.
    ///
    /// Touches the filesystem only to check that paths exist.
    pub fn prepare(&self, input: &Path) -> Result<TranscodeJob, TranscodeError> {
        if !input.is_file() {
            return Err(TranscodeError::input_missing(input.display().to_string()));
        }

        let program = self
            .program
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(TranscodeError::TranscoderNotConfigured)?;

        if !program.exists() {
            return Err(TranscodeError::transcoder_missing(
                program.display().to_string(),
            ));
        }

        let job = TranscodeJob::build(program, input, &self.preset, &self.naming)?;
        debug!(
            input = %job.input.display(),
            output = %job.output.display(),
            log = %job.log_path.display(),
            "Prepared transcode job"
        );
        Ok(job)
    }
}
