//! Snapshot builder: normalizes a raw match payload into a comparable view.
//!
//! Building is pure. The only inputs are the payload and the viewing team's
//! league id; the only output is a [`MatchSnapshot`] oriented to that team.

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::{
    error::payload::PayloadError,
    model::{
        payload::{LineupEntry, LogEntry, MatchPayload},
        snapshot::{
            CloseState, ConfirmationSource, LineupPlayer, MatchSnapshot, SnapshotComment,
            SuggestionAuthor,
        },
    },
    util::time::timestamp_to_naive,
};

/// Log action marking a side accepting the other's suggested time.
const LOG_ACTION_SCHEDULING_CONFIRM: &str = "scheduling_confirm";
/// Log action marking the platform confirming a time automatically.
const LOG_ACTION_SCHEDULING_AUTOCONFIRM: &str = "scheduling_autoconfirm";
/// Log action marking an admin changing the begin time directly.
const LOG_ACTION_CHANGE_TIME: &str = "change_time";

/// Match status string the platform uses for played-out matches.
const MATCH_STATUS_FINISHED: &str = "finished";
/// Match status strings for matches that are still ahead or in scheduling.
const MATCH_STATUS_OPEN: [&str; 2] = ["upcoming", "pending"];

/// Build the snapshot of one match from `viewing_team_id`'s perspective.
///
/// Fails when the payload carries no match section, no match id, no team id
/// on either side, or when the viewing team is on neither side. Everything
/// else degrades to "no data" rather than an error.
pub fn build_snapshot(
    payload: &MatchPayload,
    viewing_team_id: i64,
) -> Result<MatchSnapshot, PayloadError> {
    let section = payload
        .match_section
        .as_ref()
        .ok_or(PayloadError::MissingMatchSection)?;
    let match_id = section.match_id.ok_or(PayloadError::MissingMatchId)?;

    if section.team_id_1.is_none() && section.team_id_2.is_none() {
        return Err(PayloadError::MissingTeamIds);
    }

    // Orientation: which of the two sides is "us". The enemy side may still
    // be unknown (bracket not resolved), so only our own side must match.
    let viewing_is_first = if section.team_id_1 == Some(viewing_team_id) {
        true
    } else if section.team_id_2 == Some(viewing_team_id) {
        false
    } else {
        return Err(PayloadError::ViewingTeamNotInMatch {
            viewing_team_id,
            match_id,
        });
    };

    let enemy_team_id = if viewing_is_first {
        section.team_id_2
    } else {
        section.team_id_1
    };

    // The first number of a stored result is always the viewing team's score.
    let score_one = section.match_score_1.unwrap_or(0);
    let score_two = section.match_score_2.unwrap_or(0);
    let result = if score_one == 0 && score_two == 0 {
        None
    } else if viewing_is_first {
        Some(format!("{}:{}", score_one, score_two))
    } else {
        Some(format!("{}:{}", score_two, score_one))
    };

    // Scheduling status 0 = no outstanding suggestion; otherwise the code
    // names side one or side two and is mapped onto our orientation.
    let suggestion_author = match section.match_scheduling_status.unwrap_or(0) {
        0 => SuggestionAuthor::None,
        code => {
            let first_side_suggested = code == 1;
            if first_side_suggested == viewing_is_first {
                SuggestionAuthor::Team
            } else {
                SuggestionAuthor::Enemy
            }
        }
    };

    let suggestions = [
        section.match_scheduling_suggest_0,
        section.match_scheduling_suggest_1,
        section.match_scheduling_suggest_2,
    ]
    .into_iter()
    .flatten()
    .filter(|&ts| ts != 0)
    .filter_map(timestamp_to_naive)
    .collect();

    let close_state = match section.match_status.as_deref() {
        Some(MATCH_STATUS_FINISHED) => CloseState::Closed,
        Some(status) if MATCH_STATUS_OPEN.contains(&status) => CloseState::Open,
        _ => CloseState::Unknown,
    };

    let (team_lineup, enemy_lineup) = split_lineups(&payload.line_ups, viewing_team_id);

    Ok(MatchSnapshot {
        match_id,
        viewing_team_id,
        enemy_team_id,
        match_day: section.match_playday,
        match_type: payload.stage.as_ref().and_then(|s| s.stage_type.clone()),
        begin: section.match_time.and_then(timestamp_to_naive),
        begin_confirmed: section.match_scheduling_time == Some(0),
        suggestion_author,
        suggestions: Some(suggestions),
        team_lineup: Some(team_lineup),
        enemy_lineup: Some(enemy_lineup),
        comments: dedup_comments(payload),
        result,
        close_state,
        confirmation_source: latest_confirmation(&payload.logs),
        has_first_pick: viewing_is_first,
    })
}

/// Split raw lineup entries into own and enemy side.
///
/// Entries without a name or account handle cannot be correlated with
/// persisted players and are dropped before either side sees them.
fn split_lineups(
    entries: &[LineupEntry],
    viewing_team_id: i64,
) -> (Vec<LineupPlayer>, Vec<LineupPlayer>) {
    let mut team = Vec::new();
    let mut enemy = Vec::new();

    for entry in entries {
        let (Some(name), Some(handle)) = (&entry.user_name, &entry.account_value) else {
            continue;
        };
        let player = LineupPlayer {
            player_id: entry.user_id,
            name: name.clone(),
            handle: handle.clone(),
            is_leader: entry.is_leader,
        };
        if entry.team_id == Some(viewing_team_id) {
            team.push(player);
        } else {
            enemy.push(player);
        }
    }

    (team, enemy)
}

/// Deduplicate comments on `(comment_id, user_id)`, keeping first occurrence
/// order. The feed occasionally repeats entries.
fn dedup_comments(payload: &MatchPayload) -> Vec<SnapshotComment> {
    let mut seen: BTreeSet<(i64, i64)> = BTreeSet::new();
    payload
        .comments
        .iter()
        .filter(|entry| seen.insert((entry.comment_id, entry.user_id)))
        .map(|entry| SnapshotComment {
            comment_id: entry.comment_id,
            parent_id: entry.comment_parent_id,
            user_id: entry.user_id,
            content: entry.content.clone().unwrap_or_default(),
            posted_at: entry.comment_time.and_then(timestamp_to_naive),
            flag_staff: entry.comment_flag_staff.unwrap_or(false),
            flag_official: entry.comment_flag_official.unwrap_or(false),
        })
        .collect()
}

/// Ordered search over the event log, newest entry first: the first entry of
/// a recognized scheduling kind decides how the begin time was confirmed.
fn latest_confirmation(logs: &[LogEntry]) -> Option<ConfirmationSource> {
    logs.iter()
        .rev()
        .find_map(|entry| match entry.log_action.as_deref() {
            Some(LOG_ACTION_SCHEDULING_CONFIRM) => Some(ConfirmationSource::Agreement),
            Some(LOG_ACTION_SCHEDULING_AUTOCONFIRM) => Some(ConfirmationSource::AutoConfirm),
            Some(LOG_ACTION_CHANGE_TIME) => Some(ConfirmationSource::AdminChange),
            _ => None,
        })
}
