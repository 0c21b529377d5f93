//! Delivery job definitions for the dispatch queue.
//!
//! Jobs are serialized to JSON for Redis storage and deserialized by the
//! delivery workers. Each job carries everything needed to perform one send
//! to one channel, plus its attempt counter for retry bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::message::{ChannelKind, Delivery, RenderedMessage};

/// One pending send of one rendered message to one channel address.
///
/// Two jobs with identical content are distinct queue entries; the queue tags
/// every enqueue with a fresh sequence id, so nothing collapses. Idempotence
/// is the router's concern (signals fire on true transitions only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryJob {
    pub channel_kind: ChannelKind,
    /// Telegram chat id or Discord webhook URL.
    pub address: String,
    pub mention_target: Option<String>,
    pub message: RenderedMessage,
    /// Zero-based attempt counter, bumped on every retry.
    pub attempt: u32,
}

impl DeliveryJob {
    /// The same job, one attempt later.
    pub fn next_attempt(&self) -> Self {
        Self {
            attempt: self.attempt + 1,
            ..self.clone()
        }
    }
}

impl From<Delivery> for DeliveryJob {
    fn from(delivery: Delivery) -> Self {
        Self {
            channel_kind: delivery.channel.kind,
            address: delivery.channel.address,
            mention_target: delivery.channel.mention_target,
            message: delivery.message,
            attempt: 0,
        }
    }
}

/// Readable job representation for logs. Message bodies can be long, so only
/// the title is shown.
impl fmt::Display for DeliveryJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} delivery of \"{}\" (attempt {})",
            self.channel_kind, self.message.title, self.attempt
        )
    }
}

/// Receipt for one enqueued job, returned for observability.
#[derive(Debug, Clone, PartialEq)]
pub struct JobHandle {
    /// Queue-assigned sequence id, unique per enqueue.
    pub sequence: i64,
    /// When the job becomes due.
    pub deliver_at: DateTime<Utc>,
}
