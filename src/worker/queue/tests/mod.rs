//! Delivery queue tests against a live Redis (redis-test feature).
//!
//! Each test namespaces its queue via `RedisTest`, so parallel runs never
//! collide.

mod claim;
mod settle;

use gjallar_test_utils::RedisTest;

use super::{DeliveryQueue, DeliveryQueueConfig};
use crate::model::message::{ChannelKind, RenderedMessage};
use crate::model::worker::DeliveryJob;

fn queue_for(redis: &RedisTest) -> DeliveryQueue {
    DeliveryQueue::with_config(
        redis.redis_pool.clone(),
        DeliveryQueueConfig::with_queue_name(redis.queue_name()),
    )
}

fn job() -> DeliveryJob {
    DeliveryJob {
        channel_kind: ChannelKind::Telegram,
        address: "-1001".to_string(),
        mention_target: None,
        message: RenderedMessage {
            title: "\u{2705} Match date confirmed".to_string(),
            body: "body".to_string(),
            mention: true,
        },
        attempt: 0,
    }
}
