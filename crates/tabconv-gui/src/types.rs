//! Response types shared by GUI front-ends.

use serde::Serialize;
use tabconv_core::{ResolvedVideo, StreamDescriptor};

/// Every stream found for a URL, with the one selection would pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamListing {
    pub video: ResolvedVideo,
    /// Index into `video.streams`.
    pub selected: Option<usize>,
}

impl StreamListing {
    pub fn selected_stream(&self) -> Option<&StreamDescriptor> {
        self.selected.and_then(|i| self.video.streams.get(i))
    }
}

/// One open-dialog filter entry in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogFilter {
    pub label: String,
    pub extensions: Vec<String>,
    /// `Label (*.a;*.b)` as native dialogs print it.
    pub display: String,
}
