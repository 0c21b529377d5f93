//! Channel-agnostic rendered notifications.

use serde::{Deserialize, Serialize};

pub use entity::team_channel::ChannelKind;

/// A notification rendered once per signal, before channel fan-out.
///
/// `mention` is a static property of the message kind, not of the data: it
/// marks whether delivery should actively ping subscribers on channels that
/// support it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub title: String,
    pub body: String,
    pub mention: bool,
}

/// One message bound to one registered channel, ready to be enqueued.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub channel: entity::team_channel::Model,
    pub message: RenderedMessage,
}
