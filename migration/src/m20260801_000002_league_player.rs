use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_league_team::LeagueTeam;

static IDX_LEAGUE_PLAYER_TEAM_ID: &str = "idx-league_player-team_id";
static FK_LEAGUE_PLAYER_TEAM_ID: &str = "fk-league_player-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaguePlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaguePlayer::Id))
                    .col(big_integer_uniq(LeaguePlayer::PlayerId))
                    .col(string(LeaguePlayer::Name))
                    .col(string_null(LeaguePlayer::Handle))
                    .col(boolean(LeaguePlayer::IsLeader))
                    .col(integer_null(LeaguePlayer::TeamId))
                    .col(timestamp(LeaguePlayer::CreatedAt))
                    .col(timestamp(LeaguePlayer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_PLAYER_TEAM_ID)
                    .table(LeaguePlayer::Table)
                    .col(LeaguePlayer::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEAGUE_PLAYER_TEAM_ID)
                    .from_tbl(LeaguePlayer::Table)
                    .from_col(LeaguePlayer::TeamId)
                    .to_tbl(LeagueTeam::Table)
                    .to_col(LeagueTeam::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEAGUE_PLAYER_TEAM_ID)
                    .table(LeaguePlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEAGUE_PLAYER_TEAM_ID)
                    .table(LeaguePlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeaguePlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LeaguePlayer {
    Table,
    Id,
    PlayerId,
    Name,
    Handle,
    IsLeader,
    TeamId,
    CreatedAt,
    UpdatedAt,
}
