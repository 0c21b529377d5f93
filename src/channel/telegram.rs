//! Telegram Bot API adapter.

use crate::{error::delivery::DeliveryError, model::message::RenderedMessage};

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Sends messages into registered Telegram group chats via the Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl TelegramClient {
    pub fn new(http: reqwest::Client, bot_token: impl Into<String>) -> Self {
        Self::with_api_base(http, bot_token, DEFAULT_API_BASE)
    }

    /// Point the client at a different API base (used by tests to target a
    /// mock server).
    pub fn with_api_base(
        http: reqwest::Client,
        bot_token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            bot_token: bot_token.into(),
        }
    }

    /// One `sendMessage` call. Non-mentionable messages are sent silently so
    /// group members are not pinged by their own team's echoes.
    pub async fn send(
        &self,
        chat_id: &str,
        message: &RenderedMessage,
    ) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        // Telegram's legacy Markdown marks bold with single asterisks.
        let text = format!("*{}*\n\n{}", message.title, message.body).replace("**", "*");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "Markdown",
                "disable_notification": !message.mention,
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Endpoint {
            status: status.as_u16(),
            body,
        })
    }
}
