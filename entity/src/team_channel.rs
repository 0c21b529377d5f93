use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Outbound notification surface a team registered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Bot-managed Telegram group chat.
    #[sea_orm(string_value = "telegram")]
    Telegram,
    /// Discord channel reached through a webhook.
    #[sea_orm(string_value = "discord")]
    Discord,
}

/// A team's registration on one notification channel. At most one
/// registration per channel kind and team.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_channel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub kind: ChannelKind,
    /// Telegram chat id or Discord webhook URL.
    pub address: String,
    /// Role or group handle pinged by mentionable messages, where supported.
    pub mention_target: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league_team::Entity",
        from = "Column::TeamId",
        to = "super::league_team::Column::Id"
    )]
    LeagueTeam,
}

impl Related<super::league_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
