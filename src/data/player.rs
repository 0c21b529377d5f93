use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use tracing::debug;

use crate::model::snapshot::LineupPlayer;

pub struct PlayerRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_player_id(
        &self,
        player_id: i64,
    ) -> Result<Option<entity::league_player::Model>, DbErr> {
        entity::prelude::LeaguePlayer::find()
            .filter(entity::league_player::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Create or refresh players by external id, assigning them to `team_pk`.
    ///
    /// Name and alias fields are overwritten on every application; the
    /// snapshot builder already dropped entries that could not be correlated.
    pub async fn upsert_many(
        &self,
        players: &[LineupPlayer],
        team_pk: Option<i32>,
    ) -> Result<Vec<entity::league_player::Model>, DbErr> {
        let mut models = Vec::with_capacity(players.len());

        for player in players {
            let model = match self.get_by_player_id(player.player_id).await? {
                Some(existing) => {
                    let unchanged = existing.name == player.name
                        && existing.handle.as_deref() == Some(player.handle.as_str())
                        && existing.is_leader == player.is_leader.unwrap_or(false)
                        && existing.team_id == team_pk;
                    if unchanged {
                        existing
                    } else {
                        let mut active: entity::league_player::ActiveModel = existing.into();
                        active.name = ActiveValue::Set(player.name.clone());
                        active.handle = ActiveValue::Set(Some(player.handle.clone()));
                        active.is_leader = ActiveValue::Set(player.is_leader.unwrap_or(false));
                        active.team_id = ActiveValue::Set(team_pk);
                        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());
                        let updated = active.update(self.db).await?;
                        debug!("Updated player {} ({})", updated.name, updated.player_id);
                        updated
                    }
                }
                None => {
                    let active = entity::league_player::ActiveModel {
                        player_id: ActiveValue::Set(player.player_id),
                        name: ActiveValue::Set(player.name.clone()),
                        handle: ActiveValue::Set(Some(player.handle.clone())),
                        is_leader: ActiveValue::Set(player.is_leader.unwrap_or(false)),
                        team_id: ActiveValue::Set(team_pk),
                        created_at: ActiveValue::Set(Utc::now().naive_utc()),
                        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                        ..Default::default()
                    };
                    active.insert(self.db).await?
                }
            };
            models.push(model);
        }

        Ok(models)
    }

    /// External ids of everyone currently on a team's roster.
    pub async fn roster_external_ids(&self, team_pk: i32) -> Result<BTreeSet<i64>, DbErr> {
        let players = entity::prelude::LeaguePlayer::find()
            .filter(entity::league_player::Column::TeamId.eq(team_pk))
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(|player| player.player_id).collect())
    }

    /// Detach roster members no longer present in the current external id
    /// set. Rows are kept (a player may resurface elsewhere), only the team
    /// relation is cleared.
    pub async fn detach_absent(
        &self,
        team_pk: i32,
        current_ids: &BTreeSet<i64>,
    ) -> Result<u64, DbErr> {
        let players = entity::prelude::LeaguePlayer::find()
            .filter(entity::league_player::Column::TeamId.eq(team_pk))
            .all(self.db)
            .await?;

        let mut detached = 0;
        for player in players {
            if current_ids.contains(&player.player_id) {
                continue;
            }
            let mut active: entity::league_player::ActiveModel = player.into();
            active.team_id = ActiveValue::Set(None);
            active.updated_at = ActiveValue::Set(Utc::now().naive_utc());
            active.update(self.db).await?;
            detached += 1;
        }

        Ok(detached)
    }
}
