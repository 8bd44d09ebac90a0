//! Terminal presentation: the CLI main task is the UI owner.

pub mod notify;
pub mod progress;

use tabconv_core::ErrorCategory;
use tabconv_gui::{JobEvent, JobHandle, JobResult, join_job};

pub use progress::CliProgressPrinter;

/// Result of a job plus what its error notification said, if any.
#[derive(Debug)]
pub struct FinishedJob {
    pub result: JobResult,
    pub error_category: Option<ErrorCategory>,
}

/// Drive a job to completion, rendering its events as they arrive.
pub async fn run_job(handle: JobHandle) -> FinishedJob {
    let JobHandle {
        mut events,
        completion,
    } = handle;
    let mut progress = CliProgressPrinter::new();
    let mut error_category = None;

    while let Some(event) = events.recv().await {
        match event {
            JobEvent::Busy {
                active: true,
                label,
            } => progress.start(label.as_deref().unwrap_or_default()),
            JobEvent::Busy { active: false, .. } => progress.finish(),
            JobEvent::Progress { percent } => progress.set_percent(percent),
            JobEvent::Notification { notification } => {
                if notification.is_error() {
                    error_category = notification.category;
                }
                progress.suspend(|| notify::print(&notification));
            }
            JobEvent::Finished { .. } => {}
        }
    }

    FinishedJob {
        result: join_job(completion).await,
        error_category,
    }
}
