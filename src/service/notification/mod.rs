//! Notification router: turns fired signals into per-channel deliveries.
//!
//! For each signal the router resolves a message kind, consults the team's
//! setting for that kind (absent means enabled), renders the message once,
//! and instantiates it once per registered channel. Disabled kinds are
//! dropped silently; a team without channels produces no deliveries.

pub mod messages;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::debug;

use crate::model::{message::Delivery, signal::ChangeSignal};

pub use messages::{MatchMessageContext, MessageKind};

/// A team's notification surface: who it is, where it can be reached, and
/// which message kinds it muted. Loaded once per cycle.
#[derive(Debug, Clone)]
pub struct TeamNotificationContext {
    pub team: entity::league_team::Model,
    pub channels: Vec<entity::team_channel::Model>,
    /// Settings-key → enabled. Keys absent here default to enabled.
    pub settings: HashMap<String, bool>,
}

impl TeamNotificationContext {
    fn wants(&self, kind: MessageKind) -> bool {
        self.settings
            .get(kind.settings_key())
            .copied()
            .unwrap_or(true)
    }
}

/// Route fired signals to deliveries.
///
/// Pure: consumes preloaded context, produces the (channel, message) pairs to
/// enqueue. Delivery to each channel is independent downstream.
pub fn route(
    ctx: &TeamNotificationContext,
    match_ctx: &MatchMessageContext,
    signals: &[ChangeSignal],
) -> Vec<Delivery> {
    let mut deliveries = Vec::new();

    for signal in signals {
        let Some(kind) = MessageKind::for_signal(signal) else {
            continue;
        };
        if !ctx.wants(kind) {
            debug!(
                "team {} muted {}, dropping signal",
                ctx.team.team_id,
                kind.settings_key()
            );
            continue;
        }

        let message = messages::render(kind, signal, match_ctx);
        for channel in &ctx.channels {
            deliveries.push(Delivery {
                channel: channel.clone(),
                message: message.clone(),
            });
        }
    }

    deliveries
}
