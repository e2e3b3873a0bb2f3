//! Delivery channels.
//!
//! The service talks to two narrow capabilities:
//! - [`ChatTransport`]: send a text message to a chat (Telegram Bot API)
//! - [`MailTransport`]: send an HTML email with a subject (SMTP)
//!
//! Both are traits so tests can substitute deterministic doubles.

mod email;
mod telegram;

pub use email::SmtpMailer;
pub use telegram::{TELEGRAM_MESSAGE_LIMIT, TelegramBotClient};

use std::fmt;

use async_trait::async_trait;

use crate::Result;

/// The two delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Telegram,
    Email,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Telegram => write!(f, "Telegram"),
            Self::Email => write!(f, "Email"),
        }
    }
}

/// Can send a text message to a chat destination.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// An HTML email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    /// `None` when neither an explicit nor a default recipient exists; the
    /// transport decides how to fail.
    pub to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Can send an HTML message to a recipient with a subject.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_mail(&self, mail: &OutgoingMail) -> Result<()>;
}

/// Result of one channel attempt. Channel sends never return `Err`; every
/// failure ends up here with its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    /// The collaborator accepted the message.
    Sent,
    /// Required configuration is missing; no delivery was attempted.
    NotConfigured,
    /// The collaborator rejected the message or could not be reached.
    Failed(String),
}

impl ChannelOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Diagnostic for a failed attempt.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Status glyph used in logs and CLI output.
pub fn status_mark(sent: bool) -> &'static str {
    if sent { "\u{2705}" } else { "\u{274c}" }
}
