//! Discord webhook adapter.

use crate::{error::delivery::DeliveryError, model::message::RenderedMessage};

/// Executes per-team Discord webhooks. The webhook URL is the registered
/// channel address, so no global credentials are needed.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
}

impl DiscordClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// One webhook execution. Mentionable messages ping the registered role,
    /// if the team configured one.
    pub async fn send(
        &self,
        webhook_url: &str,
        mention_target: Option<&str>,
        message: &RenderedMessage,
    ) -> Result<(), DeliveryError> {
        let mut content = format!("**{}**\n{}", message.title, message.body);
        if message.mention {
            if let Some(role_id) = mention_target {
                content = format!("<@&{}>\n{}", role_id, content);
            }
        }

        let response = self
            .http
            .post(webhook_url)
            .json(&serde_json::json!({ "content": content }))
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
