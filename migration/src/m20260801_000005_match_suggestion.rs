use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000003_league_match::LeagueMatch;

static IDX_MATCH_SUGGESTION_MATCH_ID: &str = "idx-match_suggestion-match_id";
static FK_MATCH_SUGGESTION_MATCH_ID: &str = "fk-match_suggestion-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchSuggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchSuggestion::Id))
                    .col(integer(MatchSuggestion::MatchId))
                    .col(timestamp(MatchSuggestion::Begin))
                    .col(timestamp(MatchSuggestion::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_SUGGESTION_MATCH_ID)
                    .table(MatchSuggestion::Table)
                    .col(MatchSuggestion::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_SUGGESTION_MATCH_ID)
                    .from_tbl(MatchSuggestion::Table)
                    .from_col(MatchSuggestion::MatchId)
                    .to_tbl(LeagueMatch::Table)
                    .to_col(LeagueMatch::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_SUGGESTION_MATCH_ID)
                    .table(MatchSuggestion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_SUGGESTION_MATCH_ID)
                    .table(MatchSuggestion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchSuggestion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MatchSuggestion {
    Table,
    Id,
    MatchId,
    Begin,
    CreatedAt,
}
