use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueTeam::Id))
                    .col(big_integer_uniq(LeagueTeam::TeamId))
                    .col(string_null(LeagueTeam::Name))
                    .col(string_null(LeagueTeam::Tag))
                    .col(string_null(LeagueTeam::Division))
                    .col(timestamp(LeagueTeam::CreatedAt))
                    .col(timestamp(LeagueTeam::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LeagueTeam {
    Table,
    Id,
    TeamId,
    Name,
    Tag,
    Division,
    CreatedAt,
    UpdatedAt,
}
