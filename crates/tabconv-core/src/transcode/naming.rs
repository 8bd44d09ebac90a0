//! Output and log path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default suffix appended to the input stem.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-converted";

/// Default container of converted files.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "avi";

/// How a converted file is named relative to its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNaming {
    /// Appended to the input's file stem.
    pub suffix: String,
    /// Extension of the converted file, without the dot.
    pub extension: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl OutputNaming {
    pub fn new(suffix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            extension: extension.into(),
        }
    }

    /// `<dir>/<stem><suffix>.<extension>` for `input`.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let mut name = input
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_default();
        name.push(&self.suffix);
        name.push(".");
        name.push(self.extension.trim_start_matches('.'));
        input.with_file_name(name)
    }
}

/// Log file written next to `input` for a transcode attempt.
///
/// Replaces the extension with `log`. An input that already ends in `.log`
/// gets `.log` appended so the log never overwrites it.
pub fn log_path_for(input: &Path) -> PathBuf {
    let is_log = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("log"));

    if is_log {
        let mut appended = OsString::from(input.as_os_str());
        appended.push(".log");
        PathBuf::from(appended)
    } else {
        input.with_extension("log")
    }
}
