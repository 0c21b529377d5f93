//! Match update service: the entry points a scheduler calls once per match
//! and cycle.
//!
//! `evaluate` is pure; `apply_snapshot` is the single transactional write of
//! a cycle; `apply_and_notify` chains application, routing, and enqueueing.
//! A cycle that fails before `apply_snapshot` commits leaves no partial
//! state behind.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, TransactionTrait};
use tracing::{debug, error};

use entity::match_lineup::LineupSide;

use crate::{
    data::{
        comment::CommentRepository, matches::MatchRepository, player::PlayerRepository,
        team::TeamRepository,
    },
    error::Error,
    model::{
        aggregate::MatchAggregate,
        signal::ChangeSignal,
        snapshot::{LineupPlayer, MatchSnapshot},
        worker::{DeliveryJob, JobHandle},
    },
    service::{
        comparer,
        notification::{self, MatchMessageContext, TeamNotificationContext},
    },
    worker::queue::DeliveryQueue,
};

pub struct MatchUpdateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchUpdateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load the comparator's view of one persisted match row.
    pub async fn load_aggregate(
        &self,
        match_row: &entity::league_match::Model,
    ) -> Result<MatchAggregate, Error> {
        let aggregate = MatchRepository::new(self.db)
            .load_aggregate(match_row)
            .await?;
        Ok(aggregate)
    }

    /// Evaluate every comparison facet. Pure; call before applying the
    /// snapshot, since application converges the state the facets diff.
    pub fn evaluate(aggregate: &MatchAggregate, snapshot: &MatchSnapshot) -> Vec<ChangeSignal> {
        comparer::evaluate(aggregate, snapshot)
    }

    /// Apply a snapshot to its persisted row inside one transaction.
    ///
    /// The row is re-read under an exclusive lock so concurrent cycles for
    /// the same `(match_id, team_id)` key serialize. Scalars are overwritten;
    /// the suggestion set and each present lineup side are wholly replaced
    /// (players upserted by external id first); unseen comments are inserted.
    /// An absent (`None`) lineup or suggestion field is a non-destructive
    /// read and leaves persisted children untouched.
    pub async fn apply_snapshot(
        &self,
        aggregate: &MatchAggregate,
        snapshot: &MatchSnapshot,
    ) -> Result<entity::league_match::Model, Error> {
        let txn = self.db.begin().await?;

        let match_repo = MatchRepository::new(&txn);
        let match_row = match_repo
            .get_for_update(aggregate.match_row.id)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "match row {} disappeared mid-cycle",
                    aggregate.match_row.id
                ))
            })?;

        // Resolve the opponent first so lineup players can reference it. A
        // newly discovered enemy gets a shell row keyed by its league id.
        let enemy_team_pk = match snapshot.enemy_team_id {
            Some(enemy_team_id) => Some(
                TeamRepository::new(&txn)
                    .get_or_create(enemy_team_id)
                    .await?
                    .id,
            ),
            None => None,
        };

        let updated = match_repo
            .update_from_snapshot(match_row, snapshot, enemy_team_pk)
            .await?;

        if let Some(times) = &snapshot.suggestions {
            match_repo.replace_suggestions(updated.id, times).await?;
        }

        let player_repo = PlayerRepository::new(&txn);
        if let Some(players) = &snapshot.team_lineup {
            let player_pks = Self::upsert_lineup_players(
                &player_repo,
                players,
                Some(updated.team_id),
            )
            .await?;
            match_repo
                .replace_lineup(updated.id, LineupSide::Team, &player_pks)
                .await?;
        }
        if let Some(players) = &snapshot.enemy_lineup {
            let player_pks =
                Self::upsert_lineup_players(&player_repo, players, updated.enemy_team_id).await?;
            match_repo
                .replace_lineup(updated.id, LineupSide::Enemy, &player_pks)
                .await?;
        }

        CommentRepository::new(&txn)
            .upsert_many(updated.id, &snapshot.comments)
            .await?;

        txn.commit().await?;

        debug!(
            "applied snapshot of match {} for team {}",
            snapshot.match_id, snapshot.viewing_team_id
        );

        Ok(updated)
    }

    async fn upsert_lineup_players<C: sea_orm::ConnectionTrait>(
        player_repo: &PlayerRepository<'_, C>,
        players: &[LineupPlayer],
        team_pk: Option<i32>,
    ) -> Result<Vec<i32>, Error> {
        let models = player_repo.upsert_many(players, team_pk).await?;
        Ok(models.into_iter().map(|model| model.id).collect())
    }

    /// Apply the snapshot, then route the already-evaluated signals and hand
    /// the resulting messages to the delivery queue.
    ///
    /// Returns the enqueued job handles for observability. One channel's
    /// enqueue failure is logged and never blocks the others.
    pub async fn apply_and_notify(
        &self,
        queue: &DeliveryQueue,
        aggregate: &MatchAggregate,
        snapshot: &MatchSnapshot,
        signals: &[ChangeSignal],
    ) -> Result<Vec<JobHandle>, Error> {
        let updated = self.apply_snapshot(aggregate, snapshot).await?;

        let team_repo = TeamRepository::new(self.db);
        let team = entity::prelude::LeagueTeam::find_by_id(updated.team_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("owning team {} not found", updated.team_id))
            })?;
        let channels = team_repo.channels(team.id).await?;
        let settings = team_repo.settings(team.id).await?;
        let ctx = TeamNotificationContext {
            team,
            channels,
            settings,
        };

        let match_ctx = self.message_context(&updated, snapshot).await?;
        let deliveries = notification::route(&ctx, &match_ctx, signals);

        let mut handles = Vec::with_capacity(deliveries.len());
        for delivery in deliveries {
            let job = DeliveryJob::from(delivery);
            match queue.enqueue(job).await {
                Ok(handle) => handles.push(handle),
                Err(e) => error!(
                    "failed to enqueue delivery for team {}: {:?}",
                    ctx.team.team_id, e
                ),
            }
        }

        Ok(handles)
    }

    /// Assemble what the renderers may mention, preferring the snapshot for
    /// freshness and the store for the opponent's display name.
    async fn message_context(
        &self,
        updated: &entity::league_match::Model,
        snapshot: &MatchSnapshot,
    ) -> Result<MatchMessageContext, Error> {
        let enemy_name = match updated.enemy_team_id {
            Some(enemy_pk) => entity::prelude::LeagueTeam::find_by_id(enemy_pk)
                .one(self.db)
                .await?
                .and_then(|enemy| enemy.tag.or(enemy.name)),
            None => None,
        };

        Ok(MatchMessageContext {
            match_id: snapshot.match_id,
            match_day: snapshot.match_day,
            enemy_name,
            begin: snapshot.begin,
            suggestions: snapshot.suggestions.clone().unwrap_or_default(),
            enemy_lineup: snapshot
                .enemy_lineup
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|player| player.handle.clone())
                .collect(),
            confirmation_source: snapshot.confirmation_source,
        })
    }
}
