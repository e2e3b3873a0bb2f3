//! Telegram Bot API chat transport.
//!
//! Sends messages via `POST /bot<token>/sendMessage`. One request per call;
//! rate limits and other rejections are reported as errors, not retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::{Channel, ChatTransport};
use crate::config::TelegramConfig;
use crate::{Error, Result};

/// Telegram `sendMessage` text limit (UTF-8 characters).
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Error body returned by the Bot API.
#[derive(Debug, Default, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    description: Option<String>,
}

/// Bot API client bound to one bot token.
pub struct TelegramBotClient {
    client: Client,
    api_base: String,
    bot_token: String,
    parse_mode: Option<String>,
}

impl TelegramBotClient {
    /// Create a client for `bot_token`, taking the endpoint and parse mode
    /// from `config`.
    pub fn new(bot_token: impl Into<String>, config: &TelegramConfig) -> Self {
        crate::http_client::install_rustls_provider();
        Self {
            client: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            parse_mode: config.parse_mode.clone(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

#[async_trait]
impl ChatTransport for TelegramBotClient {
    async fn send_text(&self, chat_id: &str, text: &str) -> Result<()> {
        let mut payload = json!({
            "chat_id": chat_id,
            "text": truncate_message(text, TELEGRAM_MESSAGE_LIMIT),
        });
        if let Some(parse_mode) = &self.parse_mode {
            payload["parse_mode"] = json!(parse_mode);
        }

        // The request URL embeds the bot token; keep it out of error messages.
        let response = self
            .client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            debug!(chat_id, "Telegram sendMessage accepted");
            return Ok(());
        }

        let body: ApiResponse = response.json().await.unwrap_or_default();
        let description = body.description.unwrap_or_default();
        warn!("Telegram sendMessage failed: {} - {}", status, description);
        Err(Error::delivery(
            Channel::Telegram,
            format!("sendMessage failed: {} - {}", status, description),
        ))
    }
}

/// Truncate a message to fit within the Telegram character limit.
fn truncate_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let suffix = "\n\n[truncated]";
    let budget = limit - suffix.chars().count();
    let truncated: String = text.chars().take(budget).collect();
    format!("{truncated}{suffix}")
}
