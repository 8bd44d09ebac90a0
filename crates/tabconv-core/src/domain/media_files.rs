//! File-name helpers for media the user opens or saves.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::stream::VideoFormat;

/// Extensions offered by the open-file dialog for conversion input.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["avi", "mp4", "mpg", "mpeg", "webm", "mkv"];

/// File stem used when a video title cleans down to nothing.
pub const FALLBACK_FILE_STEM: &str = "video";

/// Catch-all entry appended to every open-file filter list.
pub const ALL_FILES_FILTER: FileFilter<'static> = FileFilter {
    label: "All files",
    extensions: &["*"],
};

/// One entry of a file dialog filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter<'a> {
    pub label: &'a str,
    pub extensions: &'a [&'a str],
}

impl FileFilter<'_> {
    /// Glob patterns joined the way native dialogs expect (`*.avi;*.mp4`).
    pub fn patterns(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for FileFilter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.patterns())
    }
}

/// Filters for the "choose a video to convert" dialog, most specific first.
pub const fn open_dialog_filter() -> [FileFilter<'static>; 2] {
    [
        FileFilter {
            label: "Video Files",
            extensions: SUPPORTED_VIDEO_EXTENSIONS,
        },
        ALL_FILES_FILTER,
    ]
}

/// Whether `path` has one of the extensions the open dialog offers.
pub fn is_supported_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_VIDEO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Strip characters that are not allowed in file names on any desktop OS.
///
/// Removes `<>:"/\|?*` and control characters, then trims surrounding
/// whitespace and trailing dots.
pub fn clean_filename(raw: &str) -> String {
    const INVALID: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_control() && !INVALID.contains(c))
        .collect();

    cleaned.trim().trim_end_matches('.').trim_end().to_string()
}

/// Proposed name and filter for the "save downloaded video" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSuggestion {
    /// File name including extension, e.g. `My Talk.webm`.
    pub file_name: String,
    /// Extension without the dot.
    pub extension: String,
    /// Dialog filter label, e.g. `Video Files (.webm)`.
    pub filter_label: String,
}

impl SaveSuggestion {
    /// Build a suggestion from a video title and the chosen stream's format.
    pub fn for_title(title: &str, format: VideoFormat) -> Self {
        let cleaned = clean_filename(title);
        let stem = if cleaned.is_empty() {
            FALLBACK_FILE_STEM
        } else {
            cleaned.as_str()
        };
        let extension = format.extension();

        Self {
            file_name: format!("{stem}.{extension}"),
            extension: extension.to_string(),
            filter_label: format!("Video Files (.{extension})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_clean_filename_strips_invalid_chars() {
        assert_eq!(clean_filename("a<b>c:d\"e/f\\g|h?i*j"), "abcdefghij");
        assert_eq!(clean_filename("tab\there\n"), "tabhere");
        assert_eq!(clean_filename("  spaced out.  "), "spaced out");
    }

    #[test]
    fn test_save_suggestion_uses_cleaned_title() {
        let suggestion = SaveSuggestion::for_title("Rust: The Talk?", VideoFormat::WebM);
        assert_eq!(suggestion.file_name, "Rust The Talk.webm");
        assert_eq!(suggestion.extension, "webm");
        assert_eq!(suggestion.filter_label, "Video Files (.webm)");
    }

    #[test]
    fn test_save_suggestion_falls_back_when_title_empty() {
        let suggestion = SaveSuggestion::for_title("???", VideoFormat::Mp4);
        assert_eq!(suggestion.file_name, "video.mp4");
    }

    #[test]
    fn test_open_dialog_filter_text() {
        let [video, all] = open_dialog_filter();
        assert_eq!(
            video.to_string(),
            "Video Files (*.avi;*.mp4;*.mpg;*.mpeg;*.webm;*.mkv)"
        );
        assert_eq!(all.to_string(), "All files (*.*)");
    }

    #[test]
    fn test_is_supported_video() {
        assert!(is_supported_video(&PathBuf::from("/tmp/clip.MKV")));
        assert!(is_supported_video(&PathBuf::from("clip.mpeg")));
        assert!(!is_supported_video(&PathBuf::from("notes.txt")));
        assert!(!is_supported_video(&PathBuf::from("no_extension")));
    }
}
