//! Configuration management subcommands.

use clap::Subcommand;
use tabconv_core::VideoFormat;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current settings
    Show {
        /// Print the raw JSON document
        #[arg(long)]
        json: bool,
    },
    /// Update settings (an empty value clears a path)
    Set {
        /// Path to the ffmpeg executable
        #[arg(long)]
        transcoder_path: Option<String>,
        /// Path to the yt-dlp executable
        #[arg(long)]
        resolver_path: Option<String>,
        /// Directory downloads are saved to
        #[arg(long)]
        download_dir: Option<String>,
        /// Container to download (mp4, webm, flv, 3gp)
        #[arg(long)]
        format: Option<VideoFormat>,
        /// Tallest stream to download
        #[arg(long)]
        max_resolution: Option<u32>,
        /// Appended to the input name for converted files
        #[arg(long)]
        output_suffix: Option<String>,
        /// Extension of converted files
        #[arg(long)]
        output_extension: Option<String>,
    },
    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Look for ffmpeg and yt-dlp on PATH
    Detect {
        /// Store the found paths in settings
        #[arg(long)]
        save: bool,
    },
}
