//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Download videos from hosting pages and convert local videos with ffmpeg.
#[derive(Parser)]
#[command(name = "tabconv")]
#[command(about = "Download web videos and convert them with ffmpeg")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
