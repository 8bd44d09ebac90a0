//! Transcoder flag preset.
//!
//! The defaults target small handheld players: baseline H.264 at 480x272 and
//! low-rate MP3 audio.

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configurable ffmpeg flag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscodePreset {
    pub video_codec: String,
    pub profile: String,
    pub video_bitrate: String,
    pub frame_rate: String,
    pub size: String,
    pub aspect: String,
    pub audio_codec: String,
    pub audio_filter: String,
    pub audio_bitrate: String,
    pub audio_sample_rate: String,
    /// Pass `-y` so an existing output is replaced without prompting.
    pub overwrite: bool,
}

impl Default for TranscodePreset {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            profile: "baseline".to_string(),
            video_bitrate: "600k".to_string(),
            frame_rate: "24".to_string(),
            size: "480x272".to_string(),
            aspect: "16:9".to_string(),
            audio_codec: "libmp3lame".to_string(),
            audio_filter: "volume=1".to_string(),
            audio_bitrate: "96k".to_string(),
            audio_sample_rate: "22050".to_string(),
            overwrite: true,
        }
    }
}

impl TranscodePreset {
    /// Flags between the input and output paths, in invocation order.
    fn encoding_flags(&self) -> [(&'static str, &str); 10] {
        [
            ("-vcodec", self.video_codec.as_str()),
            ("-profile:v", self.profile.as_str()),
            ("-b:v", self.video_bitrate.as_str()),
            ("-r", self.frame_rate.as_str()),
            ("-s", self.size.as_str()),
            ("-aspect", self.aspect.as_str()),
            ("-acodec", self.audio_codec.as_str()),
            ("-af", self.audio_filter.as_str()),
            ("-b:a", self.audio_bitrate.as_str()),
            ("-ar", self.audio_sample_rate.as_str()),
        ]
    }

    /// Argument vector for `input` -> `output`. Paths stay single arguments.
    pub fn to_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args = Vec::with_capacity(24);
        if self.overwrite {
            args.push(OsString::from("-y"));
        }
        args.push(OsString::from("-i"));
        args.push(input.as_os_str().to_os_string());
        for (flag, value) in self.encoding_flags() {
            args.push(OsString::from(flag));
            args.push(OsString::from(value));
        }
        args.push(output.as_os_str().to_os_string());
        args
    }

    /// Human-readable command line with quoted program and paths.
    pub fn command_line(&self, program: &Path, input: &Path, output: &Path) -> String {
        let mut line = format!("\"{}\"", program.display());
        if self.overwrite {
            line.push_str(" -y");
        }
        line.push_str(&format!(" -i \"{}\"", input.display()));
        for (flag, value) in self.encoding_flags() {
            line.push(' ');
            line.push_str(flag);
            line.push(' ');
            line.push_str(value);
        }
        line.push_str(&format!(" \"{}\"", output.display()));
        line
    }
}
