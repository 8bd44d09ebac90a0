//! Progress throttling.
//!
//! Rate-limits progress callbacks so a fast connection does not flood the
//! UI channel with one event per network chunk.

use std::time::{Duration, Instant};

use tabconv_core::DownloadProgress;

/// Rate-limiter for progress updates.
pub struct ProgressThrottle {
    last_emit: Option<Instant>,
    min_interval: Duration,
}

impl ProgressThrottle {
    /// Create a new throttle with the specified minimum interval.
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            last_emit: None,
            min_interval,
        }
    }

    /// Create a throttle with a default interval of 100ms.
    pub const fn default_interval() -> Self {
        Self::new(Duration::from_millis(100))
    }

    /// Check if enough time has passed to emit another progress update.
    pub fn should_emit(&mut self) -> bool {
        let now = Instant::now();
        match self.last_emit {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_emit = Some(now);
                true
            }
        }
    }

    /// Like [`should_emit`](Self::should_emit), but a completed transfer is
    /// always let through.
    pub fn admit(&mut self, progress: &DownloadProgress) -> bool {
        if progress.is_complete() {
            self.last_emit = Some(Instant::now());
            return true;
        }
        self.should_emit()
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::default_interval()
    }
}
