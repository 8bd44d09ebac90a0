//! Background job plumbing: the busy slot, the per-job event channel and
//! the guard that always clears the busy indicator.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tabconv_core::{DownloadProgress, ErrorCategory, JobEvent, JobResult, Notification};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::GuiError;

/// At most one job at a time runs through a backend.
#[derive(Debug, Clone, Default)]
pub(crate) struct BusySlot(Arc<AtomicBool>);

impl BusySlot {
    pub(crate) fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn claim(&self) -> Result<BusyClaim, GuiError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GuiError::Conflict("another download or conversion is running".into()))?;
        Ok(BusyClaim(self.0.clone()))
    }
}

struct BusyClaim(Arc<AtomicBool>);

impl Drop for BusyClaim {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Releases the slot and then emits `Busy { active: false }`.
///
/// Runs on every exit route of the worker task, unwinding included. A
/// worker that never reached its result gets an error notification first.
struct BusyGuard {
    claim: Option<BusyClaim>,
    events: UnboundedSender<JobEvent>,
    finished: bool,
    failure_category: Option<ErrorCategory>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        drop(self.claim.take());
        if !self.finished {
            warn!("Job worker stopped before finishing");
            let notification = Notification::job_stopped(self.failure_category);
            let _ = self.events.send(JobEvent::notification(notification));
        }
        let _ = self.events.send(JobEvent::idle());
    }
}

/// Sending half handed to job bodies. Sends after the UI stopped
/// listening are dropped.
#[derive(Debug, Clone)]
pub struct JobEvents(UnboundedSender<JobEvent>);

impl JobEvents {
    pub fn progress(&self, progress: DownloadProgress) {
        let _ = self.0.send(JobEvent::Progress {
            percent: progress.percent(),
        });
    }

    pub fn notify(&self, notification: Notification) {
        let _ = self.0.send(JobEvent::notification(notification));
    }
}

/// A running job: its events and its final result.
///
/// The event channel closes once the job has emitted its last
/// `Busy { active: false }`.
#[derive(Debug)]
pub struct JobHandle {
    pub events: UnboundedReceiver<JobEvent>,
    pub completion: JoinHandle<JobResult>,
}

impl JobHandle {
    /// Wait for the result, ignoring events.
    pub async fn wait(self) -> JobResult {
        join_job(self.completion).await
    }

    /// Drain every event, then return them with the result.
    pub async fn collect(mut self) -> (Vec<JobEvent>, JobResult) {
        let mut events = Vec::new();
        while let Some(event) = self.events.recv().await {
            events.push(event);
        }
        (events, join_job(self.completion).await)
    }
}

/// Await a job task; a panicked worker becomes `JobResult::Failed`.
pub async fn join_job(completion: JoinHandle<JobResult>) -> JobResult {
    match completion.await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Job worker did not finish");
            JobResult::Failed {
                message: format!("job worker stopped: {e}"),
            }
        }
    }
}

/// Claim `slot`, announce `label` and run `work` on a tokio task.
///
/// Event order is `Busy(label)`, whatever `work` sends, `Finished`, then
/// `Busy(false)`. A panic replaces `Finished` with an error notification
/// tagged `failure_category`; the final `Busy(false)` is always sent.
pub(crate) fn spawn_job<F, Fut>(
    slot: &BusySlot,
    label: &str,
    failure_category: Option<ErrorCategory>,
    work: F,
) -> Result<JobHandle, GuiError>
where
    F: FnOnce(JobEvents) -> Fut,
    Fut: Future<Output = JobResult> + Send + 'static,
{
    let claim = slot.claim()?;
    let (tx, rx) = unbounded_channel();
    let _ = tx.send(JobEvent::busy(label));

    let guard = BusyGuard {
        claim: Some(claim),
        events: tx.clone(),
        finished: false,
        failure_category,
    };
    let body = work(JobEvents(tx));

    debug!(%label, "Starting job");
    let completion = tokio::spawn(async move {
        let mut guard = guard;
        let result = body.await;
        guard.finished = true;
        let _ = guard.events.send(JobEvent::finished(result.clone()));
        result
    });

    Ok(JobHandle {
        events: rx,
        completion,
    })
}
