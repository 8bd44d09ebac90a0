//! PATH lookup for the external tools.

use std::path::PathBuf;

use serde::Serialize;

/// Executable name of the transcoder.
pub const TRANSCODER_PROGRAM: &str = "ffmpeg";

/// Executable name of the stream resolver.
pub const RESOLVER_PROGRAM: &str = "yt-dlp";

/// Where the external tools were found, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolLocations {
    pub transcoder: Option<PathBuf>,
    pub resolver: Option<PathBuf>,
}

impl ToolLocations {
    pub const fn all_found(&self) -> bool {
        self.transcoder.is_some() && self.resolver.is_some()
    }
}

/// Search `PATH` for ffmpeg and yt-dlp.
pub fn detect_tools() -> ToolLocations {
    ToolLocations {
        transcoder: which::which(TRANSCODER_PROGRAM).ok(),
        resolver: which::which(RESOLVER_PROGRAM).ok(),
    }
}
