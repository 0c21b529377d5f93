use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_league_team::LeagueTeam;

static IDX_TEAM_SETTING_TEAM_ID_NAME: &str = "idx-team_setting-team_id-name";
static FK_TEAM_SETTING_TEAM_ID: &str = "fk-team_setting-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamSetting::Id))
                    .col(integer(TeamSetting::TeamId))
                    .col(string(TeamSetting::Name))
                    .col(boolean(TeamSetting::Value))
                    .col(timestamp(TeamSetting::CreatedAt))
                    .col(timestamp(TeamSetting::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_SETTING_TEAM_ID_NAME)
                    .table(TeamSetting::Table)
                    .col(TeamSetting::TeamId)
                    .col(TeamSetting::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_SETTING_TEAM_ID)
                    .from_tbl(TeamSetting::Table)
                    .from_col(TeamSetting::TeamId)
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
                    .name(FK_TEAM_SETTING_TEAM_ID)
                    .table(TeamSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_SETTING_TEAM_ID_NAME)
                    .table(TeamSetting::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamSetting::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamSetting {
    Table,
    Id,
    TeamId,
    Name,
    Value,
    CreatedAt,
    UpdatedAt,
}
