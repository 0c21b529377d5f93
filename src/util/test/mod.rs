//! Factories for the ephemeral values unit tests compare with.
//!
//! Database fixtures live in `gjallar-test-utils`; these helpers build the
//! in-memory shapes (snapshots, aggregates) that never touch a connection.

use chrono::Utc;
use std::collections::BTreeSet;

use entity::league_match::{CloseState, SuggestionAuthor};

use crate::model::{
    aggregate::MatchAggregate,
    snapshot::{LineupPlayer, MatchSnapshot, SnapshotComment},
};

/// A persisted match row with neutral values, outside any database.
pub fn match_row(match_id: i64, team_pk: i32) -> entity::league_match::Model {
    entity::league_match::Model {
        id: 1,
        match_id,
        team_id: team_pk,
        enemy_team_id: None,
        match_day: Some(1),
        match_type: Some("league".to_string()),
        begin: None,
        begin_confirmed: false,
        suggestion_author: SuggestionAuthor::None,
        close_state: CloseState::Unknown,
        result: None,
        has_first_pick: true,
        created_at: Utc::now().naive_utc(),
        updated_at: Utc::now().naive_utc(),
    }
}

/// A neutral aggregate: no enemy, empty lineups, no comments, empty roster.
pub fn aggregate(match_id: i64, team_external_id: i64) -> MatchAggregate {
    MatchAggregate {
        match_row: match_row(match_id, 1),
        team_external_id,
        enemy_team_external_id: None,
        team_lineup_ids: BTreeSet::new(),
        enemy_lineup_ids: BTreeSet::new(),
        stored_comment_ids: BTreeSet::new(),
        own_roster_ids: BTreeSet::new(),
    }
}

/// A neutral snapshot: nothing outstanding, lineups unreported (`None`).
pub fn snapshot(match_id: i64, viewing_team_id: i64) -> MatchSnapshot {
    MatchSnapshot {
        match_id,
        viewing_team_id,
        enemy_team_id: None,
        match_day: Some(1),
        match_type: Some("league".to_string()),
        begin: None,
        begin_confirmed: false,
        suggestion_author: SuggestionAuthor::None,
        suggestions: Some(Vec::new()),
        team_lineup: None,
        enemy_lineup: None,
        comments: Vec::new(),
        result: None,
        close_state: CloseState::Open,
        confirmation_source: None,
        has_first_pick: true,
    }
}

/// Correlatable lineup players for the given external ids.
pub fn lineup(ids: &[i64]) -> Vec<LineupPlayer> {
    ids.iter()
        .map(|&player_id| LineupPlayer {
            player_id,
            name: format!("Player {}", player_id),
            handle: format!("Summoner {}", player_id),
            is_leader: None,
        })
        .collect()
}

/// A snapshot comment carrying only the fields comparison looks at.
pub fn comment(comment_id: i64, user_id: i64) -> SnapshotComment {
    SnapshotComment {
        comment_id,
        parent_id: None,
        user_id,
        content: format!("comment {}", comment_id),
        posted_at: None,
        flag_staff: false,
        flag_official: false,
    }
}
