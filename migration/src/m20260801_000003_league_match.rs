use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_league_team::LeagueTeam;

static IDX_LEAGUE_MATCH_MATCH_ID_TEAM_ID: &str = "idx-league_match-match_id-team_id";
static IDX_LEAGUE_MATCH_CLOSE_STATE: &str = "idx-league_match-close_state";
static FK_LEAGUE_MATCH_TEAM_ID: &str = "fk-league_match-team_id";
static FK_LEAGUE_MATCH_ENEMY_TEAM_ID: &str = "fk-league_match-enemy_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMatch::Id))
                    .col(big_integer(LeagueMatch::MatchId))
                    .col(integer(LeagueMatch::TeamId))
                    .col(integer_null(LeagueMatch::EnemyTeamId))
                    .col(integer_null(LeagueMatch::MatchDay))
                    .col(string_null(LeagueMatch::MatchType))
                    .col(timestamp_null(LeagueMatch::Begin))
                    .col(boolean(LeagueMatch::BeginConfirmed))
                    .col(string_len(LeagueMatch::SuggestionAuthor, 8))
                    .col(string_len(LeagueMatch::CloseState, 8))
                    .col(string_null(LeagueMatch::Result))
                    .col(boolean(LeagueMatch::HasFirstPick))
                    .col(timestamp(LeagueMatch::CreatedAt))
                    .col(timestamp(LeagueMatch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MATCH_MATCH_ID_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .col(LeagueMatch::MatchId)
                    .col(LeagueMatch::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MATCH_CLOSE_STATE)
                    .table(LeagueMatch::Table)
                    .col(LeagueMatch::CloseState)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEAGUE_MATCH_TEAM_ID)
                    .from_tbl(LeagueMatch::Table)
                    .from_col(LeagueMatch::TeamId)
                    .to_tbl(LeagueTeam::Table)
                    .to_col(LeagueTeam::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEAGUE_MATCH_ENEMY_TEAM_ID)
                    .from_tbl(LeagueMatch::Table)
                    .from_col(LeagueMatch::EnemyTeamId)
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
                    .name(FK_LEAGUE_MATCH_ENEMY_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEAGUE_MATCH_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEAGUE_MATCH_CLOSE_STATE)
                    .table(LeagueMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEAGUE_MATCH_MATCH_ID_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeagueMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LeagueMatch {
    Table,
    Id,
    MatchId,
    TeamId,
    EnemyTeamId,
    MatchDay,
    MatchType,
    Begin,
    BeginConfirmed,
    SuggestionAuthor,
    CloseState,
    Result,
    HasFirstPick,
    CreatedAt,
    UpdatedAt,
}
