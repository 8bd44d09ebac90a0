//! Download domain types.
//!
//! Everything the orchestrator and its adapters share: errors, progress,
//! the download plan and URL validation. No network code lives here.

mod errors;
mod types;
mod url;

pub use errors::{DownloadError, EXAMPLE_VIDEO_URL};
pub use types::{DownloadPlan, DownloadProgress, ProgressCallback};
pub use url::validate_url;
