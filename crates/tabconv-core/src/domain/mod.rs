//! Domain types for tabconv.
//!
//! Pure data with no infrastructure dependencies.

mod media_files;
mod stream;

pub use media_files::{
    ALL_FILES_FILTER, FALLBACK_FILE_STEM, FileFilter, SUPPORTED_VIDEO_EXTENSIONS, SaveSuggestion,
    clean_filename, is_supported_video, open_dialog_filter,
};
pub use stream::{
    DEFAULT_MAX_RESOLUTION, DEFAULT_TARGET_FORMAT, ResolvedVideo, StreamCriteria,
    StreamDescriptor, VideoFormat,
};
