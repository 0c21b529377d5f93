use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "league_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Account id on the league platform.
    #[sea_orm(unique)]
    pub player_id: i64,
    pub name: String,
    /// In-game account name. Players without a linked game account have none.
    pub handle: Option<String>,
    pub is_leader: bool,
    /// Current team, detached (not deleted) when the player leaves the roster.
    pub team_id: Option<i32>,
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
    #[sea_orm(has_many = "super::match_lineup::Entity")]
    MatchLineup,
}

impl Related<super::league_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueTeam.def()
    }
}

impl Related<super::match_lineup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchLineup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
