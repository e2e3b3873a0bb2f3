//! Stdout contract for the calling process.
//!
//! The caller looks for the marker tokens; everything else on stdout is for
//! humans. Logs go to stderr.

use std::fmt::Display;
use std::io::{self, Write};

use dealdrip_notify::NotificationOutcome;
use dealdrip_notify::channels::status_mark;

pub const USAGE: &str = r#"Usage: send-notification "title" "message" "product_url""#;

pub const SUCCESS_MARKER: &str = "NOTIFICATION_SUCCESS";
pub const FAILED_MARKER: &str = "NOTIFICATION_FAILED";
pub const ERROR_MARKER: &str = "NOTIFICATION_ERROR";

pub fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{USAGE}")
}

pub fn write_outcome(out: &mut impl Write, outcome: &NotificationOutcome) -> io::Result<()> {
    if outcome.success {
        writeln!(out, "{} {SUCCESS_MARKER}", status_mark(true))?;
        writeln!(out, "Telegram: {}", status_mark(outcome.telegram))?;
        writeln!(out, "Email: {}", status_mark(outcome.email))
    } else {
        writeln!(out, "{} {FAILED_MARKER}", status_mark(false))
    }
}

pub fn write_error(out: &mut impl Write, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "{} {ERROR_MARKER}: {error}", status_mark(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: NotificationOutcome) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, &outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_partial_success_lists_channels() {
        let text = render(NotificationOutcome::new(false, true));
        assert_eq!(
            text,
            "\u{2705} NOTIFICATION_SUCCESS\nTelegram: \u{274c}\nEmail: \u{2705}\n"
        );
    }

    #[test]
    fn test_failure_is_single_line() {
        let text = render(NotificationOutcome::new(false, false));
        assert_eq!(text, "\u{274c} NOTIFICATION_FAILED\n");
    }

    #[test]
    fn test_error_line_carries_message() {
        let mut buf = Vec::new();
        write_error(&mut buf, &"SMTP_PORT must be a port number").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\u{274c} NOTIFICATION_ERROR: SMTP_PORT must be a port number\n"
        );
    }
}
