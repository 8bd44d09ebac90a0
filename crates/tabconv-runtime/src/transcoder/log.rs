//! Plain-text log written next to the input after every transcoder run.

use std::fmt::Write as _;
use std::path::Path;

use chrono::Local;
use tabconv_core::TranscodeError;

/// Heading above captured standard output.
pub const STDOUT_HEADING: &str = "** Standard output:";

/// Heading above captured standard error.
pub const STDERR_HEADING: &str = "** Standard error:";

/// Render the log text for one run.
pub fn render_log(
    command_line: &str,
    exit_code: Option<i32>,
    stdout: &[String],
    stderr: &[String],
) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S %z"));
    let _ = writeln!(text, "Commandline: {command_line}");
    match exit_code {
        Some(code) => {
            let _ = writeln!(text, "Exit code: {code}");
        }
        None => text.push_str("Exit code: none (terminated by signal)\n"),
    }

    for (heading, lines) in [(STDOUT_HEADING, stdout), (STDERR_HEADING, stderr)] {
        text.push('\n');
        text.push_str(heading);
        text.push('\n');
        for line in lines {
            text.push_str(line);
            text.push('\n');
        }
    }

    text
}

/// Write the rendered log, replacing any previous log for the same input.
pub async fn write_log(path: &Path, contents: &str) -> Result<(), TranscodeError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| TranscodeError::log_write(path.display().to_string(), &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_all_sections() {
        let text = render_log(
            "\"ffmpeg\" -y -i \"a.mp4\" \"a-converted.avi\"",
            Some(1),
            &["out".to_string()],
            &["Unknown encoder 'libx264'".to_string()],
        );

        assert!(text.contains("Commandline: \"ffmpeg\" -y -i \"a.mp4\" \"a-converted.avi\""));
        assert!(text.contains("Exit code: 1"));
        let out_at = text.find(STDOUT_HEADING).unwrap();
        let err_at = text.find(STDERR_HEADING).unwrap();
        assert!(out_at < err_at);
        assert!(text[out_at..err_at].contains("out"));
        assert!(text[err_at..].contains("Unknown encoder"));
    }

    #[test]
    fn test_render_signal_exit() {
        let text = render_log("x", None, &[], &[]);
        assert!(text.contains("terminated by signal"));
        assert!(text.contains(STDOUT_HEADING));
        assert!(text.contains(STDERR_HEADING));
    }
}
