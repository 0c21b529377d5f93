pub use sea_orm_migration::prelude::*;

mod m20260801_000001_league_team;
mod m20260801_000002_league_player;
mod m20260801_000003_league_match;
mod m20260801_000004_match_lineup;
mod m20260801_000005_match_suggestion;
mod m20260801_000006_match_comment;
mod m20260801_000007_team_channel;
mod m20260801_000008_team_setting;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_league_team::Migration),
            Box::new(m20260801_000002_league_player::Migration),
            Box::new(m20260801_000003_league_match::Migration),
            Box::new(m20260801_000004_match_lineup::Migration),
            Box::new(m20260801_000005_match_suggestion::Migration),
            Box::new(m20260801_000006_match_comment::Migration),
            Box::new(m20260801_000007_team_channel::Migration),
            Box::new(m20260801_000008_team_setting::Migration),
        ]
    }
}
