use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "league_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Team id on the league platform.
    #[sea_orm(unique)]
    pub team_id: i64,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub division: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::league_player::Entity")]
    LeaguePlayer,
    #[sea_orm(has_many = "super::team_channel::Entity")]
    TeamChannel,
    #[sea_orm(has_many = "super::team_setting::Entity")]
    TeamSetting,
}

impl Related<super::league_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaguePlayer.def()
    }
}

impl Related<super::team_channel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamChannel.def()
    }
}

impl Related<super::team_setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSetting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
