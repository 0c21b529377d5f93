use sea_orm::entity::prelude::*;

/// A comment on a match page.
///
/// `comment_id` is assigned independently on each side's data feed, so it is
/// unique only within one match row, never globally.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "match_comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub comment_id: i64,
    pub parent_id: Option<i64>,
    /// League user id of the author.
    pub user_id: i64,
    pub content: String,
    pub posted_at: Option<DateTime>,
    pub flag_staff: bool,
    pub flag_official: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
