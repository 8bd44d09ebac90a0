//! Transcode job description and outcome.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::TranscodeError;
use super::naming::{OutputNaming, log_path_for};
use super::preset::TranscodePreset;

/// Everything needed to run the transcoder once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Quoted rendering of `program` + `args`, recorded in the log.
    pub command_line: String,
    pub log_path: PathBuf,
}

impl TranscodeJob {
    /// Derive output/log paths and arguments for `input`.
    ///
    /// Refuses a naming that would make the output overwrite the input.
    pub fn build(
        program: &Path,
        input: &Path,
        preset: &TranscodePreset,
        naming: &OutputNaming,
    ) -> Result<Self, TranscodeError> {
        let output = naming.output_path_for(input);
        if output == input {
            return Err(TranscodeError::SameAsInput {
                path: input.display().to_string(),
            });
        }

        Ok(Self {
            args: preset.to_args(input, &output),
            command_line: preset.command_line(program, input, &output),
            log_path: log_path_for(input),
            input: input.to_path_buf(),
            output,
            program: program.to_path_buf(),
        })
    }
}

/// Result of a transcoder process that started and exited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeOutcome {
    /// Exit code; `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub output: PathBuf,
    pub log_path: PathBuf,
    pub command_line: String,
}

impl TranscodeOutcome {
    /// The transcoder exited with status 0.
    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}
