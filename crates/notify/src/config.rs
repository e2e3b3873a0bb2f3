//! Channel configuration sourced from environment variables.
//!
//! The configuration is read once at process start and handed to
//! [`NotificationService::new`](crate::NotificationService::new). Empty values
//! count as absent, so `TELEGRAM_CHAT_ID=` disables the channel the same way
//! an unset variable does.

use crate::{Error, Result};

/// Default Telegram Bot API endpoint.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default SMTP relay (Gmail with an app password).
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Telegram channel configuration.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token. Without it no bot client is created.
    pub bot_token: Option<String>,
    /// Destination chat (user, group or `@channel`).
    pub chat_id: Option<String>,
    /// Optional `parse_mode` (Markdown, MarkdownV2, HTML). Plain text when unset.
    pub parse_mode: Option<String>,
    /// Bot API base URL.
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            parse_mode: None,
            api_base: DEFAULT_TELEGRAM_API_URL.to_string(),
        }
    }
}

/// Email channel configuration.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port. 465 uses implicit TLS, anything else STARTTLS.
    pub smtp_port: u16,
    /// Mail account identity, also used as the sender address.
    pub username: Option<String>,
    /// Mail account credential.
    pub password: Option<String>,
    /// Recipient used when a send does not name one.
    pub default_recipient: Option<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: DEFAULT_SMTP_SERVER.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            username: None,
            password: None,
            default_recipient: None,
        }
    }
}

/// Complete notifier configuration.
#[derive(Debug, Clone, Default)]
pub struct NotifyConfig {
    pub telegram: TelegramConfig,
    pub email: EmailConfig,
}

impl NotifyConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let smtp_port = match get("SMTP_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("SMTP_PORT must be a port number, got {port:?}")))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            telegram: TelegramConfig {
                bot_token: get("TELEGRAM_BOT_TOKEN"),
                chat_id: get("TELEGRAM_CHAT_ID"),
                parse_mode: get("TELEGRAM_PARSE_MODE"),
                api_base: get("TELEGRAM_API_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            },
            email: EmailConfig {
                smtp_host: get("SMTP_SERVER").unwrap_or_else(|| DEFAULT_SMTP_SERVER.to_string()),
                smtp_port,
                username: get("EMAIL_USER"),
                password: get("EMAIL_APP_PASSWORD"),
                default_recipient: get("DEFAULT_EMAIL_RECIPIENT"),
            },
        })
    }
}
