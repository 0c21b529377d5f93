use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbBackend, DbErr,
    EntityTrait, QueryFilter, QuerySelect,
};

use entity::league_match::{CloseState, SuggestionAuthor};
use entity::match_lineup::LineupSide;

use crate::model::{aggregate::MatchAggregate, snapshot::MatchSnapshot};

/// Matches stay in the recheck window this long after their begin once
/// closed, so late result corrections and comments are still picked up.
const CLOSED_RECHECK_WINDOW_DAYS: i64 = 2;

pub struct MatchRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_match_and_team(
        &self,
        match_id: i64,
        team_pk: i32,
    ) -> Result<Option<entity::league_match::Model>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::MatchId.eq(match_id))
            .filter(entity::league_match::Column::TeamId.eq(team_pk))
            .one(self.db)
            .await
    }

    /// Get one perspective row, creating a blank one on first sight of the
    /// match. `(match_id, team_id)` is unique; the opposite perspective gets
    /// its own row.
    pub async fn get_or_create(
        &self,
        match_id: i64,
        team_pk: i32,
    ) -> Result<entity::league_match::Model, DbErr> {
        if let Some(match_row) = self.get_by_match_and_team(match_id, team_pk).await? {
            return Ok(match_row);
        }

        let match_row = entity::league_match::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            team_id: ActiveValue::Set(team_pk),
            begin_confirmed: ActiveValue::Set(false),
            suggestion_author: ActiveValue::Set(SuggestionAuthor::None),
            close_state: ActiveValue::Set(CloseState::Unknown),
            has_first_pick: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match_row.insert(self.db).await
    }

    /// Re-read one row with an exclusive row lock, serializing concurrent
    /// cycles for the same `(match_id, team_id)` key. Row locks are a
    /// Postgres feature; on other backends the plain read is returned and
    /// serialization falls to the caller's single-writer assignment.
    pub async fn get_for_update(
        &self,
        match_pk: i32,
    ) -> Result<Option<entity::league_match::Model>, DbErr> {
        let mut query = entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::Id.eq(match_pk));
        if self.db.get_database_backend() == DbBackend::Postgres {
            query = query.lock_exclusive();
        }
        query.one(self.db).await
    }

    /// Assemble the comparator's view of one persisted row: the row itself,
    /// both teams' external ids, per-side lineup id sets, stored comment ids,
    /// and the owning team's roster ids.
    pub async fn load_aggregate(
        &self,
        match_row: &entity::league_match::Model,
    ) -> Result<MatchAggregate, DbErr> {
        let team = entity::prelude::LeagueTeam::find_by_id(match_row.team_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "owning team {} of match row {} not found",
                    match_row.team_id, match_row.id
                ))
            })?;

        let enemy_team_external_id = match match_row.enemy_team_id {
            Some(enemy_pk) => entity::prelude::LeagueTeam::find_by_id(enemy_pk)
                .one(self.db)
                .await?
                .map(|enemy| enemy.team_id),
            None => None,
        };

        let mut team_lineup_ids = BTreeSet::new();
        let mut enemy_lineup_ids = BTreeSet::new();
        let slots = entity::prelude::MatchLineup::find()
            .filter(entity::match_lineup::Column::MatchId.eq(match_row.id))
            .find_also_related(entity::prelude::LeaguePlayer)
            .all(self.db)
            .await?;
        for (slot, player) in slots {
            let Some(player) = player else { continue };
            match slot.side {
                LineupSide::Team => team_lineup_ids.insert(player.player_id),
                LineupSide::Enemy => enemy_lineup_ids.insert(player.player_id),
            };
        }

        let comments = entity::prelude::MatchComment::find()
            .filter(entity::match_comment::Column::MatchId.eq(match_row.id))
            .all(self.db)
            .await?;
        let stored_comment_ids = comments.into_iter().map(|row| row.comment_id).collect();

        let roster = entity::prelude::LeaguePlayer::find()
            .filter(entity::league_player::Column::TeamId.eq(match_row.team_id))
            .all(self.db)
            .await?;
        let own_roster_ids = roster.into_iter().map(|player| player.player_id).collect();

        Ok(MatchAggregate {
            match_row: match_row.clone(),
            team_external_id: team.team_id,
            enemy_team_external_id,
            team_lineup_ids,
            enemy_lineup_ids,
            stored_comment_ids,
            own_roster_ids,
        })
    }

    /// Overwrite the row's scalar fields from a snapshot. Children
    /// (suggestions, lineups, comments) are replaced separately.
    pub async fn update_from_snapshot(
        &self,
        match_row: entity::league_match::Model,
        snapshot: &MatchSnapshot,
        enemy_team_pk: Option<i32>,
    ) -> Result<entity::league_match::Model, DbErr> {
        let mut active: entity::league_match::ActiveModel = match_row.into();
        if enemy_team_pk.is_some() {
            active.enemy_team_id = ActiveValue::Set(enemy_team_pk);
        }
        active.match_day = ActiveValue::Set(snapshot.match_day);
        active.match_type = ActiveValue::Set(snapshot.match_type.clone());
        active.begin = ActiveValue::Set(snapshot.begin);
        active.begin_confirmed = ActiveValue::Set(snapshot.begin_confirmed);
        active.suggestion_author = ActiveValue::Set(snapshot.suggestion_author);
        active.close_state = ActiveValue::Set(snapshot.close_state);
        active.result = ActiveValue::Set(snapshot.result.clone());
        active.has_first_pick = ActiveValue::Set(snapshot.has_first_pick);
        active.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        active.update(self.db).await
    }

    /// Replace the row's full suggestion set. Suggestions have no identity
    /// across cycles; only the current set matters.
    pub async fn replace_suggestions(
        &self,
        match_pk: i32,
        times: &[chrono::NaiveDateTime],
    ) -> Result<(), DbErr> {
        entity::prelude::MatchSuggestion::delete_many()
            .filter(entity::match_suggestion::Column::MatchId.eq(match_pk))
            .exec(self.db)
            .await?;

        for &begin in times {
            let suggestion = entity::match_suggestion::ActiveModel {
                match_id: ActiveValue::Set(match_pk),
                begin: ActiveValue::Set(begin),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            suggestion.insert(self.db).await?;
        }

        Ok(())
    }

    /// Wholly replace one side's lineup slots. Partial patching would leak
    /// stale members, so the old set always goes first.
    pub async fn replace_lineup(
        &self,
        match_pk: i32,
        side: LineupSide,
        player_pks: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::MatchLineup::delete_many()
            .filter(entity::match_lineup::Column::MatchId.eq(match_pk))
            .filter(entity::match_lineup::Column::Side.eq(side))
            .exec(self.db)
            .await?;

        for &player_pk in player_pks {
            let slot = entity::match_lineup::ActiveModel {
                match_id: ActiveValue::Set(match_pk),
                player_id: ActiveValue::Set(player_pk),
                side: ActiveValue::Set(side),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            slot.insert(self.db).await?;
        }

        Ok(())
    }

    /// Rows worth another check cycle: anything not conclusively closed, plus
    /// recently closed matches whose page may still change.
    pub async fn to_recheck(&self) -> Result<Vec<entity::league_match::Model>, DbErr> {
        let cutoff = Utc::now().naive_utc() - Duration::days(CLOSED_RECHECK_WINDOW_DAYS);

        entity::prelude::LeagueMatch::find()
            .filter(
                Condition::any()
                    .add(entity::league_match::Column::CloseState.ne(CloseState::Closed))
                    .add(
                        Condition::all()
                            .add(entity::league_match::Column::CloseState.eq(CloseState::Closed))
                            .add(entity::league_match::Column::Begin.gte(cutoff)),
                    ),
            )
            .all(self.db)
            .await
    }
}
