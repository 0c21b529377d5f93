use sea_orm::entity::prelude::*;

/// A proposed begin time for a match. The full set is replaced on every
/// update cycle; rows have no identity across cycles.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_suggestion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub begin: DateTime,
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
}

impl Related<super::league_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
