//! Raw match payload as fetched from the league platform.
//!
//! The fetch layer hands this over as-is; every field the platform may omit is
//! optional here. Validation and orientation happen in the snapshot builder,
//! not during deserialization.

use serde::Deserialize;

/// One match's raw data: the match section, the stage it belongs to, lineups,
/// comments, and the append-only event log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchPayload {
    #[serde(rename = "match")]
    pub match_section: Option<MatchSection>,
    pub stage: Option<StageSection>,
    #[serde(default)]
    pub line_ups: Vec<LineupEntry>,
    #[serde(default)]
    pub comments: Vec<CommentEntry>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Scheduling, score, and team id fields of the match section.
///
/// `match_scheduling_status` encodes who made the latest open suggestion:
/// 0 = none outstanding, 1 = side one, 2 = side two.
/// `match_scheduling_time` equal to 0 means the begin time is agreed on.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchSection {
    pub match_id: Option<i64>,
    pub team_id_1: Option<i64>,
    pub team_id_2: Option<i64>,
    pub match_playday: Option<i32>,
    pub match_time: Option<i64>,
    pub match_scheduling_status: Option<i32>,
    pub match_scheduling_time: Option<i64>,
    pub match_scheduling_suggest_0: Option<i64>,
    pub match_scheduling_suggest_1: Option<i64>,
    pub match_scheduling_suggest_2: Option<i64>,
    pub match_score_1: Option<i32>,
    pub match_score_2: Option<i32>,
    /// One of `upcoming`, `pending`, `finished`.
    pub match_status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageSection {
    pub stage_type: Option<String>,
}

/// One lineup slot as published by the platform. `team_id` tells which side
/// the entry belongs to; entries without a name or account handle cannot be
/// correlated with persisted players and are dropped by the builder.
#[derive(Debug, Clone, Deserialize)]
pub struct LineupEntry {
    pub team_id: Option<i64>,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub account_value: Option<String>,
    pub is_leader: Option<bool>,
}

/// One comment on the match page. `comment_id` is scoped to this match's feed.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentEntry {
    pub comment_id: i64,
    pub comment_parent_id: Option<i64>,
    pub user_id: i64,
    pub content: Option<String>,
    pub comment_time: Option<i64>,
    pub comment_flag_staff: Option<bool>,
    pub comment_flag_official: Option<bool>,
}

/// One entry of the append-only event log, oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    pub log_time: Option<i64>,
    pub user_id: Option<i64>,
    pub log_action: Option<String>,
    pub log_details: Option<String>,
}
