use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000002_league_player::LeaguePlayer, m20260801_000003_league_match::LeagueMatch,
};

static IDX_MATCH_LINEUP_MATCH_PLAYER_SIDE: &str = "idx-match_lineup-match_id-player_id-side";
static FK_MATCH_LINEUP_MATCH_ID: &str = "fk-match_lineup-match_id";
static FK_MATCH_LINEUP_PLAYER_ID: &str = "fk-match_lineup-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchLineup::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchLineup::Id))
                    .col(integer(MatchLineup::MatchId))
                    .col(integer(MatchLineup::PlayerId))
                    .col(string_len(MatchLineup::Side, 8))
                    .col(timestamp(MatchLineup::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_LINEUP_MATCH_PLAYER_SIDE)
                    .table(MatchLineup::Table)
                    .col(MatchLineup::MatchId)
                    .col(MatchLineup::PlayerId)
                    .col(MatchLineup::Side)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_LINEUP_MATCH_ID)
                    .from_tbl(MatchLineup::Table)
                    .from_col(MatchLineup::MatchId)
                    .to_tbl(LeagueMatch::Table)
                    .to_col(LeagueMatch::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_LINEUP_PLAYER_ID)
                    .from_tbl(MatchLineup::Table)
                    .from_col(MatchLineup::PlayerId)
                    .to_tbl(LeaguePlayer::Table)
                    .to_col(LeaguePlayer::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_LINEUP_PLAYER_ID)
                    .table(MatchLineup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MATCH_LINEUP_MATCH_ID)
                    .table(MatchLineup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_LINEUP_MATCH_PLAYER_SIDE)
                    .table(MatchLineup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MatchLineup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MatchLineup {
    Table,
    Id,
    MatchId,
    PlayerId,
    Side,
    CreatedAt,
}
