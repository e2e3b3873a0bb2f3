//! Notification service implementation.
//!
//! The NotificationService is responsible for:
//! - Holding the chat and mail transports built from [`NotifyConfig`]
//! - Sending to each channel independently, downgrading every failure to a
//!   [`ChannelOutcome`]
//! - Fanning a notification out to both channels and aggregating the result

use std::sync::Arc;

use tracing::{error, info};

use crate::Result;
use crate::channels::{
    ChannelOutcome, ChatTransport, MailTransport, OutgoingMail, SmtpMailer, TelegramBotClient,
    status_mark,
};
use crate::config::NotifyConfig;
use crate::message;

/// Aggregated result of [`NotificationService::send_notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOutcome {
    /// Whether the Telegram message was delivered.
    pub telegram: bool,
    /// Whether the email was delivered.
    pub email: bool,
    /// At least one channel delivered.
    pub success: bool,
}

impl NotificationOutcome {
    pub fn new(telegram: bool, email: bool) -> Self {
        Self {
            telegram,
            email,
            success: telegram || email,
        }
    }
}

/// Telegram + email notifier.
pub struct NotificationService {
    chat: Option<Arc<dyn ChatTransport>>,
    chat_id: Option<String>,
    mailer: Arc<dyn MailTransport>,
    mail_from: Option<String>,
    default_recipient: Option<String>,
}

impl NotificationService {
    /// Build the service and its transports.
    ///
    /// The bot client only exists when a bot token is configured. The SMTP
    /// transport is always built; a missing mail identity is detected when
    /// sending.
    pub fn new(config: &NotifyConfig) -> Result<Self> {
        let chat = config.telegram.bot_token.as_deref().map(|token| {
            Arc::new(TelegramBotClient::new(token, &config.telegram)) as Arc<dyn ChatTransport>
        });
        let mailer = Arc::new(SmtpMailer::new(&config.email)?);
        Ok(Self::with_transports(config, chat, mailer))
    }

    /// Build the service from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::new(&NotifyConfig::from_env()?)
    }

    /// Build the service around caller-supplied transports.
    pub fn with_transports(
        config: &NotifyConfig,
        chat: Option<Arc<dyn ChatTransport>>,
        mailer: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            chat,
            chat_id: config.telegram.chat_id.clone(),
            mailer,
            mail_from: config.email.username.clone(),
            default_recipient: config.email.default_recipient.clone(),
        }
    }

    /// Whether a bot client was created for this instance.
    pub fn telegram_enabled(&self) -> bool {
        self.chat.is_some()
    }

    /// Send `message` to the configured chat.
    pub async fn send_telegram_message(&self, message: &str) -> ChannelOutcome {
        let (Some(chat), Some(chat_id)) = (&self.chat, &self.chat_id) else {
            info!("\u{274c} Telegram not configured");
            return ChannelOutcome::NotConfigured;
        };

        match chat.send_text(chat_id, message).await {
            Ok(()) => {
                info!("\u{2705} Telegram message sent successfully");
                ChannelOutcome::Sent
            }
            Err(e) => {
                error!("\u{274c} Telegram error: {}", e);
                ChannelOutcome::Failed(e.to_string())
            }
        }
    }

    /// Send a branded HTML email to `to_email`, or the default recipient.
    pub async fn send_email_notification(
        &self,
        subject: &str,
        message: &str,
        to_email: Option<&str>,
    ) -> ChannelOutcome {
        let Some(from) = &self.mail_from else {
            info!("\u{274c} Email not configured");
            return ChannelOutcome::NotConfigured;
        };

        let mail = OutgoingMail {
            from: from.clone(),
            to: to_email
                .map(str::to_string)
                .or_else(|| self.default_recipient.clone()),
            subject: subject.to_string(),
            html: message::email_html(subject, message),
        };

        match self.mailer.send_mail(&mail).await {
            Ok(()) => {
                info!("\u{2705} Email sent successfully");
                ChannelOutcome::Sent
            }
            Err(e) => {
                error!("\u{274c} Email error: {}", e);
                ChannelOutcome::Failed(e.to_string())
            }
        }
    }

    /// Send to both channels concurrently and wait for both to settle.
    pub async fn send_notification(
        &self,
        title: &str,
        message: &str,
        email_recipient: Option<&str>,
    ) -> NotificationOutcome {
        info!("\u{1f4e2} Sending notification: {}", title);

        let chat_text = message::chat_text(title, message);

        // Neither future can fail, so join! waits for both outcomes.
        let (telegram, email) = tokio::join!(
            self.send_telegram_message(&chat_text),
            self.send_email_notification(title, message, email_recipient),
        );

        let outcome = NotificationOutcome::new(telegram.is_sent(), email.is_sent());
        info!(
            "\u{1f4ca} Results: Telegram: {} | Email: {}",
            status_mark(outcome.telegram),
            status_mark(outcome.email)
        );
        outcome
    }

    /// Send a timestamped test notification through both channels.
    pub async fn test_notifications(&self) -> NotificationOutcome {
        info!("\u{1f9ea} Testing notification system...");
        let body = message::test_message(&chrono::Local::now());
        self.send_notification(message::TEST_TITLE, &body, None)
            .await
    }
}
