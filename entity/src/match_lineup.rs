use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which roster a lineup slot belongs to, relative to the owning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum LineupSide {
    #[sea_orm(string_value = "team")]
    Team,
    #[sea_orm(string_value = "enemy")]
    Enemy,
}

/// One slot in a match lineup. A side's slots are always replaced wholesale
/// when a new lineup is observed, never patched.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_lineup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub side: LineupSide,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league_match::Entity",
        from = "Column::MatchId",
        to = "super::league_match::Column::Id"
    )]
    LeagueMatch,
    #[sea_orm(
        belongs_to = "super::league_player::Entity",
        from = "Column::PlayerId",
        to = "super::league_player::Column::Id"
    )]
    LeaguePlayer,
}

impl Related<super::league_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueMatch.def()
    }
}

impl Related<super::league_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaguePlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
