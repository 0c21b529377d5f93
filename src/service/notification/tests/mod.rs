
use std::collections::HashMap;

use chrono::Utc;

use entity::team_channel::ChannelKind;

use crate::service::notification::TeamNotificationContext;

fn team(team_id: i64) -> entity::league_team::Model {
    entity::league_team::Model {
        id: 1,
        team_id,
        name: Some(format!("Team {}", team_id)),
        tag: Some(format!("T{}", team_id)),
        division: None,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

fn channel(id: i32, kind: ChannelKind) -> entity::team_channel::Model {
    entity::team_channel::Model {
        id,
        team_id: 1,
        kind,
        address: match kind {
            ChannelKind::Telegram => "-1001".to_string(),
            ChannelKind::Discord => "https://discord.example/webhook".to_string(),
        },
        mention_target: None,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

/// A team registered on both channel kinds with default (empty) settings.
fn context() -> TeamNotificationContext {
    TeamNotificationContext {
        team: team(1),
        channels: vec![
            channel(1, ChannelKind::Telegram),
            channel(2, ChannelKind::Discord),
        ],
        settings: HashMap::new(),
    }
}
