//! Framework-neutral GUI backend facade for tabconv.
//!
//! A window (or a terminal front-end playing that role) binds to
//! [`GuiBackend`]. Long-running work runs on tokio tasks and reports back
//! through a per-job channel of [`JobEvent`]s; the UI owner is the only
//! one that touches presentation state.
//!
//! # Architecture
//!
//! ```text
//! Front-ends:   tabconv-cli     (a desktop window)
//!                    ↓                 ↓
//! Facade:            └── tabconv-gui ──┘
//!                        GuiBackend
//!                            ↓
//! Core:          tabconv-core ports + DownloadOrchestrator
//! ```

#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use url as _;

mod backend;
mod convert;
mod deps;
mod downloads;
mod error;
mod jobs;
mod settings;
pub mod types;

pub use backend::GuiBackend;
pub use deps::GuiDeps;
pub use error::GuiError;
pub use jobs::{JobEvents, JobHandle, join_job};

pub use convert::ConvertOps;
pub use downloads::DownloadOps;
pub use settings::SettingsOps;

pub use tabconv_core::{JobEvent, JobResult, Notification};
