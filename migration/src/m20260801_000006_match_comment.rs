use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000003_league_match::LeagueMatch;

static IDX_MATCH_COMMENT_MATCH_ID_COMMENT_ID: &str = "idx-match_comment-match_id-comment_id";
static FK_MATCH_COMMENT_MATCH_ID: &str = "fk-match_comment-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchComment::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchComment::Id))
                    .col(integer(MatchComment::MatchId))
                    .col(big_integer(MatchComment::CommentId))
                    .col(big_integer_null(MatchComment::ParentId))
                    .col(big_integer(MatchComment::UserId))
                    .col(text(MatchComment::Content))
                    .col(timestamp_null(MatchComment::PostedAt))
                    .col(boolean(MatchComment::FlagStaff))
                    .col(boolean(MatchComment::FlagOfficial))
                    .col(timestamp(MatchComment::CreatedAt))
                    .col(timestamp(MatchComment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_COMMENT_MATCH_ID_COMMENT_ID)
                    .table(MatchComment::Table)
                    .col(MatchComment::MatchId)
                    .col(MatchComment::CommentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_COMMENT_MATCH_ID)
                    .from_tbl(MatchComment::Table)
                    .from_col(MatchComment::MatchId)
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
                    .name(FK_MATCH_COMMENT_MATCH_ID)
                    .table(MatchComment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_COMMENT_MATCH_ID_COMMENT_ID)
                    .table(MatchComment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchComment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MatchComment {
    Table,
    Id,
    MatchId,
    CommentId,
    ParentId,
    UserId,
    Content,
    PostedAt,
    FlagStaff,
    FlagOfficial,
    CreatedAt,
    UpdatedAt,
}
