//! Process and OS adapters for tabconv.
//!
//! - [`FfmpegRunner`] implements `TranscodeRunner` by spawning ffmpeg
//! - [`JsonSettingsRepository`] implements `SettingsRepository` on a JSON file
//! - [`system`] finds tools on `PATH` and opens files in the default app

#![deny(unused_crate_dependencies)]

mod settings_store;
pub mod system;
pub mod transcoder;

pub use settings_store::{JsonSettingsRepository, apply_env_overrides};
pub use system::{OpenError, ToolLocations, detect_tools, open_in_default_app};
pub use transcoder::FfmpegRunner;

#[cfg(windows)]
pub(crate) fn hide_console_window(cmd: &mut tokio::process::Command) {
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
pub(crate) const fn hide_console_window(_cmd: &mut tokio::process::Command) {}
