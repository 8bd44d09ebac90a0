//! Printing notifications, the terminal stand-in for a message box.

use tabconv_core::{Notification, NotificationKind};

/// One notification as printable text, without trailing newline.
pub fn render(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Info => "✓",
        NotificationKind::Error => "✗",
    };
    let mut text = format!("{marker} {}: {}", notification.title, notification.message);
    if let Some(log) = notification.log_to_open() {
        text.push_str(&format!("\n  Log: {}", log.display()));
    }
    text
}

/// Info goes to stdout, errors to stderr.
pub fn print(notification: &Notification) {
    let text = render(notification);
    if notification.is_error() {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tabconv_core::events::{CONVERSION_FAILED, CONVERSION_TITLE};
    use tabconv_core::{ErrorCategory, NotificationAction};

    #[test]
    fn test_render_failure_with_log() {
        let note = Notification::error(
            Some(ErrorCategory::Transcoder),
            CONVERSION_TITLE,
            CONVERSION_FAILED,
        )
        .with_action(NotificationAction::OpenLog(PathBuf::from("/v/clip.log")));

        assert_eq!(
            render(&note),
            "✗ Conversion: Conversion failed - see log for more information.\n  Log: /v/clip.log"
        );
    }
}
