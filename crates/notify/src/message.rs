//! Message bodies for the chat and email channels.

use chrono::{DateTime, TimeZone};

/// Title used by [`NotificationService::test_notifications`](crate::NotificationService::test_notifications).
pub const TEST_TITLE: &str = "Test Notification";

/// Chat text: bold title line, blank line, raw body.
pub fn chat_text(title: &str, message: &str) -> String {
    format!("\u{1f525} *{title}*\n\n{message}")
}

/// Body with every `\n` turned into an HTML line break.
pub fn html_line_breaks(message: &str) -> String {
    message.replace('\n', "<br>")
}

/// Branded HTML email. The markup itself contains no line breaks; newlines in
/// the subject or the body become `<br>`.
pub fn email_html(subject: &str, message: &str) -> String {
    let subject = html_line_breaks(subject);
    let body = html_line_breaks(message);
    format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">"#,
            r#"<div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 20px; text-align: center;">"#,
            r#"<h1 style="color: white; margin: 0;">{flame} DealDrip Alert</h1>"#,
            r#"</div>"#,
            r#"<div style="padding: 20px; background: #f9f9f9;">"#,
            r#"<h2 style="color: #333;">{subject}</h2>"#,
            r#"<div style="background: white; padding: 15px; border-radius: 5px; box-shadow: 0 2px 5px rgba(0,0,0,0.1);">"#,
            "{body}",
            r#"</div>"#,
            r#"<p style="text-align: center; color: #666; margin-top: 20px;">"#,
            r#"<em>Sent by DealDrip Notification System</em>"#,
            r#"</p>"#,
            r#"</div>"#,
            r#"</div>"#,
        ),
        flame = "\u{1f525}",
        subject = subject,
        body = body,
    )
}

/// Self-test body stamped with the given time.
pub fn test_message<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "This is a test notification from DealDrip!\n\nTimestamp: {}",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}
