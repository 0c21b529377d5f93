use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Who made the latest open scheduling suggestion on a match.
///
/// Stored as an explicit enum rather than a nullable boolean so the
/// comparator's transition table stays exhaustive. `None` covers both "no
/// outstanding suggestion" and "never observed".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum SuggestionAuthor {
    #[sea_orm(string_value = "none")]
    #[default]
    None,
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "enemy")]
    Enemy,
}

/// Whether a match has been played out, as far as the platform has told us.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, Default,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum CloseState {
    #[sea_orm(string_value = "unknown")]
    #[default]
    Unknown,
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// One viewing team's perspective of a league match.
///
/// The same real-world match produces two rows, one per registered side,
/// linked only by the shared `match_id`. The rows are never merged; each is
/// compared and updated independently. `(match_id, team_id)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "league_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Match id on the league platform. Unique only together with `team_id`.
    pub match_id: i64,
    /// The team whose perspective this row records.
    pub team_id: i32,
    /// Known once the bracket resolves; NULL until first discovered.
    pub enemy_team_id: Option<i32>,
    pub match_day: Option<i32>,
    pub match_type: Option<String>,
    pub begin: Option<DateTime>,
    pub begin_confirmed: bool,
    pub suggestion_author: SuggestionAuthor,
    pub close_state: CloseState,
    /// Score oriented to the owning team, e.g. "2:1". NULL until scored.
    pub result: Option<String>,
    /// The owning team picks side in game one.
    pub has_first_pick: bool,
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
    Team,
    #[sea_orm(
        belongs_to = "super::league_team::Entity",
        from = "Column::EnemyTeamId",
        to = "super::league_team::Column::Id"
    )]
    EnemyTeam,
    #[sea_orm(has_many = "super::match_lineup::Entity")]
    MatchLineup,
    #[sea_orm(has_many = "super::match_suggestion::Entity")]
    MatchSuggestion,
    #[sea_orm(has_many = "super::match_comment::Entity")]
    MatchComment,
}

impl Related<super::match_lineup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchLineup.def()
    }
}

impl Related<super::match_suggestion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchSuggestion.def()
    }
}

impl Related<super::match_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchComment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
