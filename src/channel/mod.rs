//! Thin delivery adapters for the supported notification channels.
//!
//! The adapters do one thing: turn a rendered message into one HTTP call and
//! map the response onto the transient/permanent split of
//! [`DeliveryError`](crate::error::delivery::DeliveryError). Formatting of the
//! platforms' richer features (markup dialects, role mentions) stays minimal
//! on purpose; the platforms' full APIs are not this crate's concern.

pub mod discord;
pub mod telegram;

#[cfg(test)]
mod tests;

use crate::{error::delivery::DeliveryError, model::message::ChannelKind, model::worker::DeliveryJob};

pub use discord::DiscordClient;
pub use telegram::TelegramClient;

/// All channel adapters, built once at startup and shared by the delivery
/// workers.
#[derive(Clone)]
pub struct ChannelSet {
    telegram: TelegramClient,
    discord: DiscordClient,
}

impl ChannelSet {
    pub fn new(telegram: TelegramClient, discord: DiscordClient) -> Self {
        Self { telegram, discord }
    }

    /// Perform one delivery attempt for a job on its channel.
    pub async fn deliver(&self, job: &DeliveryJob) -> Result<(), DeliveryError> {
        match job.channel_kind {
            ChannelKind::Telegram => self.telegram.send(&job.address, &job.message).await,
            ChannelKind::Discord => {
                self.discord
                    .send(&job.address, job.mention_target.as_deref(), &job.message)
                    .await
            }
        }
    }
}
