//! Test context and fixture insertion helpers.
//!
//! Helpers insert rows straight through the entity crate so the test-utils
//! crate stays free of a dependency on the service crate it tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use entity::league_match::{CloseState, SuggestionAuthor};
use entity::match_lineup::LineupSide;
use entity::team_channel::ChannelKind;

use crate::error::TestError;

/// Handle on the in-memory test database plus fixture shortcuts.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Insert a team with display fields derived from its id.
    pub async fn insert_team(&self, team_id: i64) -> Result<entity::league_team::Model, TestError> {
        let team = entity::league_team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(Some(format!("Team {}", team_id))),
            tag: ActiveValue::Set(Some(format!("T{}", team_id))),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(team.insert(&self.db).await?)
    }

    /// Insert a player on a team's roster (or teamless with `None`).
    pub async fn insert_player(
        &self,
        player_id: i64,
        team_pk: Option<i32>,
    ) -> Result<entity::league_player::Model, TestError> {
        let player = entity::league_player::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            name: ActiveValue::Set(format!("Player {}", player_id)),
            handle: ActiveValue::Set(Some(format!("Summoner {}", player_id))),
            is_leader: ActiveValue::Set(false),
            team_id: ActiveValue::Set(team_pk),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(player.insert(&self.db).await?)
    }

    /// Insert a blank match row from one team's perspective.
    pub async fn insert_match(
        &self,
        match_id: i64,
        team_pk: i32,
        enemy_team_pk: Option<i32>,
    ) -> Result<entity::league_match::Model, TestError> {
        let match_row = entity::league_match::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            team_id: ActiveValue::Set(team_pk),
            enemy_team_id: ActiveValue::Set(enemy_team_pk),
            match_day: ActiveValue::Set(Some(1)),
            begin_confirmed: ActiveValue::Set(false),
            suggestion_author: ActiveValue::Set(SuggestionAuthor::None),
            close_state: ActiveValue::Set(CloseState::Unknown),
            has_first_pick: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(match_row.insert(&self.db).await?)
    }

    /// Insert one lineup slot.
    pub async fn insert_lineup_slot(
        &self,
        match_pk: i32,
        player_pk: i32,
        side: LineupSide,
    ) -> Result<entity::match_lineup::Model, TestError> {
        let slot = entity::match_lineup::ActiveModel {
            match_id: ActiveValue::Set(match_pk),
            player_id: ActiveValue::Set(player_pk),
            side: ActiveValue::Set(side),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(slot.insert(&self.db).await?)
    }

    /// Insert a stored comment.
    pub async fn insert_comment(
        &self,
        match_pk: i32,
        comment_id: i64,
        user_id: i64,
    ) -> Result<entity::match_comment::Model, TestError> {
        let comment = entity::match_comment::ActiveModel {
            match_id: ActiveValue::Set(match_pk),
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(format!("comment {}", comment_id)),
            flag_staff: ActiveValue::Set(false),
            flag_official: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(comment.insert(&self.db).await?)
    }

    /// Register a channel for a team.
    pub async fn insert_channel(
        &self,
        team_pk: i32,
        kind: ChannelKind,
        address: &str,
    ) -> Result<entity::team_channel::Model, TestError> {
        let channel = entity::team_channel::ActiveModel {
            team_id: ActiveValue::Set(team_pk),
            kind: ActiveValue::Set(kind),
            address: ActiveValue::Set(address.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(channel.insert(&self.db).await?)
    }

    /// Set a notification toggle for a team.
    pub async fn insert_setting(
        &self,
        team_pk: i32,
        name: &str,
        value: bool,
    ) -> Result<entity::team_setting::Model, TestError> {
        let setting = entity::team_setting::ActiveModel {
            team_id: ActiveValue::Set(team_pk),
            name: ActiveValue::Set(name.to_string()),
            value: ActiveValue::Set(value),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(setting.insert(&self.db).await?)
    }
}
