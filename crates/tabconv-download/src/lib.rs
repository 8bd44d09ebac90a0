//! Stream resolution and media downloads for tabconv.
//!
//! - `resolver` - yt-dlp backed [`StreamResolver`](tabconv_core::StreamResolver)
//! - `http` - streaming reqwest [`MediaDownloader`](tabconv_core::MediaDownloader)
//! - `orchestrator` - validate, resolve, select and download

#![deny(unused_crate_dependencies)]

// Re-export core types for convenience
pub use tabconv_core::download::{
    DownloadError, DownloadPlan, DownloadProgress, ProgressCallback, validate_url,
};
pub use tabconv_core::ports::{MediaDownloader, StreamResolver};

mod http;
mod orchestrator;
pub(crate) mod progress;
mod resolver;

pub use http::{HttpDownloader, part_path_for};
pub use orchestrator::{DownloadOrchestrator, default_destination};
pub use progress::ProgressThrottle;
pub use resolver::{DEFAULT_RESOLVER_PROGRAM, YtDlpResolver, parse_info_json};
