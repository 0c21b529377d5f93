use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    ModelTrait, QueryFilter, QuerySelect, RelationTrait,
};

use entity::team_channel::ChannelKind;

pub struct TeamRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_team_id(
        &self,
        team_id: i64,
    ) -> Result<Option<entity::league_team::Model>, DbErr> {
        entity::prelude::LeagueTeam::find()
            .filter(entity::league_team::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    /// Get a team row, creating an empty shell when the id is new. Used when
    /// an opponent is discovered before it ever registered itself.
    pub async fn get_or_create(
        &self,
        team_id: i64,
    ) -> Result<entity::league_team::Model, DbErr> {
        if let Some(team) = self.get_by_team_id(team_id).await? {
            return Ok(team);
        }

        let team = entity::league_team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    /// Create or refresh a team's platform-sourced fields.
    pub async fn upsert(
        &self,
        team_id: i64,
        name: Option<String>,
        tag: Option<String>,
        division: Option<String>,
    ) -> Result<entity::league_team::Model, DbErr> {
        let mut team: entity::league_team::ActiveModel = self
            .get_or_create(team_id)
            .await?
            .into();
        team.name = ActiveValue::Set(name);
        team.tag = ActiveValue::Set(tag);
        team.division = ActiveValue::Set(division);
        team.updated_at = ActiveValue::Set(Utc::now().naive_utc());
        team.update(self.db).await
    }

    /// Teams with at least one active channel registration. Only these are
    /// worth re-checking.
    pub async fn registered(&self) -> Result<Vec<entity::league_team::Model>, DbErr> {
        entity::prelude::LeagueTeam::find()
            .join(
                JoinType::InnerJoin,
                entity::league_team::Relation::TeamChannel.def(),
            )
            .distinct()
            .all(self.db)
            .await
    }

    pub async fn channels(
        &self,
        team_pk: i32,
    ) -> Result<Vec<entity::team_channel::Model>, DbErr> {
        entity::prelude::TeamChannel::find()
            .filter(entity::team_channel::Column::TeamId.eq(team_pk))
            .all(self.db)
            .await
    }

    /// The team's settings as a key → enabled map. Keys never written stay
    /// absent, which callers treat as enabled.
    pub async fn settings(&self, team_pk: i32) -> Result<HashMap<String, bool>, DbErr> {
        let rows = entity::prelude::TeamSetting::find()
            .filter(entity::team_setting::Column::TeamId.eq(team_pk))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| (row.name, row.value)).collect())
    }

    pub async fn set_setting(
        &self,
        team_pk: i32,
        name: &str,
        value: bool,
    ) -> Result<entity::team_setting::Model, DbErr> {
        let existing = entity::prelude::TeamSetting::find()
            .filter(entity::team_setting::Column::TeamId.eq(team_pk))
            .filter(entity::team_setting::Column::Name.eq(name))
            .one(self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut setting: entity::team_setting::ActiveModel = row.into();
                setting.value = ActiveValue::Set(value);
                setting.updated_at = ActiveValue::Set(Utc::now().naive_utc());
                setting.update(self.db).await
            }
            None => {
                let setting = entity::team_setting::ActiveModel {
                    team_id: ActiveValue::Set(team_pk),
                    name: ActiveValue::Set(name.to_string()),
                    value: ActiveValue::Set(value),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };
                setting.insert(self.db).await
            }
        }
    }

    /// Register a channel, replacing an existing registration of the same
    /// kind. At most one registration per kind and team.
    pub async fn register_channel(
        &self,
        team_pk: i32,
        kind: ChannelKind,
        address: &str,
        mention_target: Option<&str>,
    ) -> Result<entity::team_channel::Model, DbErr> {
        let existing = entity::prelude::TeamChannel::find()
            .filter(entity::team_channel::Column::TeamId.eq(team_pk))
            .filter(entity::team_channel::Column::Kind.eq(kind))
            .one(self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut channel: entity::team_channel::ActiveModel = row.into();
                channel.address = ActiveValue::Set(address.to_string());
                channel.mention_target =
                    ActiveValue::Set(mention_target.map(|target| target.to_string()));
                channel.updated_at = ActiveValue::Set(Utc::now().naive_utc());
                channel.update(self.db).await
            }
            None => {
                let channel = entity::team_channel::ActiveModel {
                    team_id: ActiveValue::Set(team_pk),
                    kind: ActiveValue::Set(kind),
                    address: ActiveValue::Set(address.to_string()),
                    mention_target: ActiveValue::Set(
                        mention_target.map(|target| target.to_string()),
                    ),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                };
                channel.insert(self.db).await
            }
        }
    }

    /// Drop one channel registration, then soft-remove the team if that was
    /// its last one.
    pub async fn remove_channel(&self, team_pk: i32, kind: ChannelKind) -> Result<bool, DbErr> {
        let existing = entity::prelude::TeamChannel::find()
            .filter(entity::team_channel::Column::TeamId.eq(team_pk))
            .filter(entity::team_channel::Column::Kind.eq(kind))
            .one(self.db)
            .await?;

        if let Some(row) = existing {
            row.delete(self.db).await?;
        }

        self.soft_delete_if_unregistered(team_pk).await
    }

    /// Soft removal: a team with no remaining channel registration loses its
    /// matches (with their suggestions, lineups, and comments) and settings.
    /// The team row and its players stay, so a re-registration starts clean
    /// but keeps identity.
    ///
    /// Returns whether the removal ran.
    pub async fn soft_delete_if_unregistered(&self, team_pk: i32) -> Result<bool, DbErr> {
        if !self.channels(team_pk).await?.is_empty() {
            return Ok(false);
        }

        let matches = entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::TeamId.eq(team_pk))
            .all(self.db)
            .await?;

        for match_row in matches {
            entity::prelude::MatchLineup::delete_many()
                .filter(entity::match_lineup::Column::MatchId.eq(match_row.id))
                .exec(self.db)
                .await?;
            entity::prelude::MatchSuggestion::delete_many()
                .filter(entity::match_suggestion::Column::MatchId.eq(match_row.id))
                .exec(self.db)
                .await?;
            entity::prelude::MatchComment::delete_many()
                .filter(entity::match_comment::Column::MatchId.eq(match_row.id))
                .exec(self.db)
                .await?;
            match_row.delete(self.db).await?;
        }

        entity::prelude::TeamSetting::delete_many()
            .filter(entity::team_setting::Column::TeamId.eq(team_pk))
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
