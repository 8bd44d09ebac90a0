//! Conversion operations for the GUI backend.

use std::path::{Path, PathBuf};

use tabconv_core::events::CONVERTING_LABEL;
use tabconv_core::{
    ErrorCategory, JobResult, Notification, is_supported_video, open_dialog_filter,
};
use tracing::warn;

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::jobs::{BusySlot, JobHandle, spawn_job};
use crate::types::DialogFilter;

/// Conversion operations handler.
pub struct ConvertOps<'a> {
    deps: &'a GuiDeps,
    slot: &'a BusySlot,
}

impl<'a> ConvertOps<'a> {
    pub(crate) const fn new(deps: &'a GuiDeps, slot: &'a BusySlot) -> Self {
        Self { deps, slot }
    }

    /// Filters for the "choose a video" dialog.
    pub fn dialog_filters() -> Vec<DialogFilter> {
        open_dialog_filter()
            .iter()
            .map(|filter| DialogFilter {
                label: filter.label.to_string(),
                extensions: filter.extensions.iter().map(ToString::to_string).collect(),
                display: filter.to_string(),
            })
            .collect()
    }

    pub fn is_supported(path: &Path) -> bool {
        is_supported_video(path)
    }

    /// Check preconditions, then run the transcoder in the background.
    ///
    /// A missing input or transcoder is returned here and nothing starts.
    pub async fn start(&self, input: PathBuf) -> Result<JobHandle, GuiError> {
        let config = self.deps.effective_settings().await?.transcoder_config();
        config.prepare(&input)?;

        let runner = self.deps.runner.clone();
        spawn_job(
            self.slot,
            CONVERTING_LABEL,
            Some(ErrorCategory::Transcoder),
            move |events| async move {
                match runner.run(&input, &config).await {
                    Ok(outcome) => {
                        events.notify(Notification::from_outcome(&outcome));
                        JobResult::Transcoded { outcome }
                    }
                    Err(err) => {
                        warn!(error = %err, input = %input.display(), "Conversion did not run");
                        events.notify(Notification::from(&err));
                        JobResult::Failed {
                            message: err.user_message(),
                        }
                    }
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_filters() {
        let filters = ConvertOps::dialog_filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(
            filters[0].display,
            "Video Files (*.avi;*.mp4;*.mpg;*.mpeg;*.webm;*.mkv)"
        );
        assert_eq!(filters[1].display, "All files (*.*)");
        assert!(ConvertOps::is_supported(Path::new("clip.MKV")));
    }
}
