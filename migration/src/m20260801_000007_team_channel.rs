use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_league_team::LeagueTeam;

static IDX_TEAM_CHANNEL_TEAM_ID_KIND: &str = "idx-team_channel-team_id-kind";
static FK_TEAM_CHANNEL_TEAM_ID: &str = "fk-team_channel-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamChannel::Id))
                    .col(integer(TeamChannel::TeamId))
                    .col(string_len(TeamChannel::Kind, 16))
                    .col(string(TeamChannel::Address))
                    .col(string_null(TeamChannel::MentionTarget))
                    .col(timestamp(TeamChannel::CreatedAt))
                    .col(timestamp(TeamChannel::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_CHANNEL_TEAM_ID_KIND)
                    .table(TeamChannel::Table)
                    .col(TeamChannel::TeamId)
                    .col(TeamChannel::Kind)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_CHANNEL_TEAM_ID)
                    .from_tbl(TeamChannel::Table)
                    .from_col(TeamChannel::TeamId)
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
                    .name(FK_TEAM_CHANNEL_TEAM_ID)
                    .table(TeamChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_CHANNEL_TEAM_ID_KIND)
                    .table(TeamChannel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamChannel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamChannel {
    Table,
    Id,
    TeamId,
    Kind,
    Address,
    MentionTarget,
    CreatedAt,
    UpdatedAt,
}
