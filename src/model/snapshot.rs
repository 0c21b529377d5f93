//! The normalized, immutable view of one match from one team's perspective.

use chrono::NaiveDateTime;

pub use entity::league_match::{CloseState, SuggestionAuthor};

/// How a confirmed begin time came to be, taken from the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationSource {
    /// One side accepted the other's suggestion.
    Agreement,
    /// The platform confirmed the time automatically.
    AutoConfirm,
    /// An admin changed the begin time directly.
    AdminChange,
}

/// A lineup member that survived correlation filtering: name and handle are
/// always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupPlayer {
    pub player_id: i64,
    pub name: String,
    pub handle: String,
    pub is_leader: Option<bool>,
}

/// A comment as carried by the snapshot. Only `comment_id` and `user_id`
/// participate in comparison; the rest passes through for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotComment {
    pub comment_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: i64,
    pub content: String,
    pub posted_at: Option<NaiveDateTime>,
    pub flag_staff: bool,
    pub flag_official: bool,
}

/// Comparable view of one match, freshly built each check cycle and never
/// persisted. All oriented fields (result, lineups, suggestion authorship,
/// first pick) are relative to `viewing_team_id`.
///
/// The lineup and suggestion fields distinguish "no data" (`None`, a
/// non-destructive read that must not clear persisted state) from an explicit
/// empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub match_id: i64,
    pub viewing_team_id: i64,
    pub enemy_team_id: Option<i64>,
    pub match_day: Option<i32>,
    pub match_type: Option<String>,
    pub begin: Option<NaiveDateTime>,
    pub begin_confirmed: bool,
    pub suggestion_author: SuggestionAuthor,
    pub suggestions: Option<Vec<NaiveDateTime>>,
    pub team_lineup: Option<Vec<LineupPlayer>>,
    pub enemy_lineup: Option<Vec<LineupPlayer>>,
    pub comments: Vec<SnapshotComment>,
    pub result: Option<String>,
    pub close_state: CloseState,
    pub confirmation_source: Option<ConfirmationSource>,
    pub has_first_pick: bool,
}
