//! Top-level command definitions.

use std::path::PathBuf;

use clap::Subcommand;
use tabconv_core::VideoFormat;

use crate::config_commands::ConfigCommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Download the best matching stream of a video page
    Download {
        /// Page URL, e.g. https://www.youtube.com/watch?v=3PADxcM_Vi8
        url: String,
        /// Save to this file instead of the suggested name
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory for the suggested file name (ignored with --output)
        #[arg(long, env = "TABCONV_DOWNLOAD_DIR")]
        dir: Option<PathBuf>,
        /// Container to download (mp4, webm, flv, 3gp)
        #[arg(long)]
        format: Option<VideoFormat>,
        /// Tallest stream to accept
        #[arg(long)]
        max_resolution: Option<u32>,
        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
        /// Convert the downloaded file afterwards
        #[arg(long)]
        convert: bool,
    },
    /// Convert a local video with the configured ffmpeg preset
    Convert {
        /// Video to convert
        file: PathBuf,
        /// Open the log in the default application if conversion fails
        #[arg(long)]
        open_log: bool,
    },
    /// List the streams of a video page and the one that would be chosen
    Streams {
        /// Page URL
        url: String,
    },
    /// View or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Show resolved data, settings and download paths
    Paths,
}
