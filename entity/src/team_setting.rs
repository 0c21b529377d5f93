use sea_orm::entity::prelude::*;

/// Per-team notification toggle. Absence of a row means enabled.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    /// Settings key of a message kind, e.g. `enemy_scheduling_suggestion`.
    pub name: String,
    pub value: bool,
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
